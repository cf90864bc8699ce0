use dialoguer::Input;

use crate::constants::{MAX_ITEMS, SAMPLE_BUDGET, SAMPLE_MENU};
use crate::error::{MenuError, Result};
use crate::models::{parse_budget, parse_items, Item};

/// Check that a parsed menu can be enumerated.
pub fn validate_items(items: &[Item]) -> Result<()> {
    if items.is_empty() {
        return Err(MenuError::InvalidInput("No valid menu items".to_string()));
    }
    if items.len() > MAX_ITEMS {
        return Err(MenuError::InvalidInput(format!(
            "At most {} menu items are supported, got {}",
            MAX_ITEMS,
            items.len()
        )));
    }
    Ok(())
}

/// Parse and validate the raw menu field.
pub fn read_items(raw: &str) -> Result<Vec<Item>> {
    let items = parse_items(raw);
    validate_items(&items)?;
    Ok(items)
}

/// Parse the raw budget field.
pub fn read_budget(raw: &str) -> Result<i64> {
    parse_budget(raw).ok_or_else(|| MenuError::InvalidInput(format!("Invalid budget: '{}'", raw)))
}

/// A validated request for the combination listing.
#[derive(Debug, Clone)]
pub struct MenuRequest {
    pub items: Vec<Item>,
    pub budget: i64,
}

impl MenuRequest {
    /// Build a request from the two raw text fields.
    ///
    /// Fails with `InvalidInput` before any enumeration happens.
    pub fn from_fields(items: &str, budget: &str) -> Result<Self> {
        let items = read_items(items)?;
        let budget = read_budget(budget)?;
        Ok(Self { items, budget })
    }
}

/// Prompt for the comma-separated menu.
pub fn prompt_items() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Menu items (name:price, comma separated)")
        .default(SAMPLE_MENU.to_string())
        .interact_text()?;
    Ok(input)
}

/// Prompt for the budget.
pub fn prompt_budget() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Budget")
        .default(SAMPLE_BUDGET.to_string())
        .interact_text()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_fields() {
        let request = MenuRequest::from_fields("Nasi:10000, Ayam:15000", "20000").unwrap();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.budget, 20000);
    }

    #[test]
    fn test_empty_menu_is_invalid() {
        let err = MenuRequest::from_fields("", "20000").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_unparsable_budget_is_invalid() {
        let err = MenuRequest::from_fields("Nasi:10000", "lots").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_negative_budget_is_valid() {
        let request = MenuRequest::from_fields("Nasi:10000", "-100").unwrap();
        assert_eq!(request.budget, -100);
    }

    #[test]
    fn test_too_many_items_is_invalid() {
        let items: Vec<Item> = (0..=MAX_ITEMS).map(|i| Item::new(format!("M{}", i), 1)).collect();
        assert!(validate_items(&items).is_err());
        assert!(validate_items(&items[..MAX_ITEMS]).is_ok());
    }
}
