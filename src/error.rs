use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MenuError {
    /// True for errors that should be shown as the invalid-input notice.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MenuError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
