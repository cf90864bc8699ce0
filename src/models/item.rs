use serde::{Deserialize, Serialize};

/// A menu entry with its price in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Parse a single `name:price` token.
    ///
    /// Only the first two `:`-separated segments are read. Returns `None` for an
    /// empty name or a price that is not a non-negative integer.
    pub fn parse_token(token: &str) -> Option<Self> {
        let mut parts = token.split(':');
        let name = parts.next()?.trim();
        let price = parts.next()?.trim();

        if name.is_empty() {
            return None;
        }

        let price: u64 = price.parse().ok()?;
        Some(Self::new(name, price))
    }
}

/// Parse a comma-separated list of `name:price` tokens.
///
/// Invalid tokens are dropped silently; order is preserved.
pub fn parse_items(input: &str) -> Vec<Item> {
    let items: Vec<Item> = input.split(',').filter_map(Item::parse_token).collect();
    tracing::debug!(tokens = input.split(',').count(), kept = items.len(), "parsed menu");
    items
}

/// Parse a budget field. Negative values are valid budgets.
pub fn parse_budget(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
