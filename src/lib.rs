pub mod benchmark;
pub mod cli;
pub mod constants;
pub mod enumerator;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;

pub use error::{MenuError, Result};
pub use models::{Combination, ComplexityResult, Item};
