use crate::models::{mask_contains, Combination, Item};

/// Number of non-empty subsets of an `n`-item menu.
///
/// Panics if `n` is 64 or wider.
pub fn subset_count(n: usize) -> u64 {
    (1u64 << n) - 1
}

/// Sum the prices of the items selected by `mask`.
///
/// Saturates at `u64::MAX`, which no `i64` budget can reach.
#[inline]
pub fn subset_total(items: &[Item], mask: u64) -> u64 {
    let mut total: u64 = 0;
    for (i, item) in items.iter().enumerate() {
        if mask_contains(mask, i) {
            total = total.saturating_add(item.price);
        }
    }
    total
}

/// Whether a total fits a (possibly negative) budget.
#[inline]
pub fn fits_budget(total: u64, budget: i64) -> bool {
    u64::try_from(budget).is_ok_and(|budget| total <= budget)
}

/// Enumerate every non-empty subset of `items` whose total fits `budget`.
///
/// Every mask from 1 to 2^N - 1 is visited with no pruning. The result is
/// sorted by total, highest first; equal totals keep mask order.
///
/// # Panics
///
/// Panics if `items` has 64 or more entries.
pub fn enumerate_combinations(items: &[Item], budget: i64) -> Vec<Combination> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }

    let last_mask = subset_count(n);
    let mut results = Vec::new();

    for mask in 1..=last_mask {
        let total = subset_total(items, mask);
        if fits_budget(total, budget) {
            results.push(Combination::new(mask, total));
        }
    }

    // Stable sort keeps ascending mask order among equal totals
    results.sort_by(|a, b| b.total.cmp(&a.total));

    tracing::debug!(
        items = n,
        considered = last_mask,
        affordable = results.len(),
        budget,
        "enumerated combinations"
    );

    results
}
