use menu_combo_rs::enumerator::{enumerate_combinations, subset_count, subset_total};
use menu_combo_rs::interface::MenuRequest;
use menu_combo_rs::models::{parse_items, Item};

fn warung_menu() -> Vec<Item> {
    parse_items("Nasi:10000, Ayam:15000, Es Teh:5000")
}

fn larger_menu() -> Vec<Item> {
    parse_items(
        "Nasi:10000, Ayam:15000, Es Teh:5000, Tempe:3000, Sate:22000, \
         Soto:12000, Kerupuk:2000, Jus:9000, Bakso:14000, Kopi:5000",
    )
}

#[test]
fn test_warung_menu_scenario() {
    let items = warung_menu();
    let combos = enumerate_combinations(&items, 20000);

    assert_eq!(combos.len(), 5, "5 of the 7 subsets fit Rp 20,000");

    let listing: Vec<(String, u64)> = combos
        .iter()
        .map(|c| (c.names(&items).join(" + "), c.total))
        .collect();

    assert_eq!(listing[0], ("Ayam + Es Teh".to_string(), 20000));
    assert_eq!(listing[3], ("Nasi".to_string(), 10000));
    assert_eq!(listing[4], ("Es Teh".to_string(), 5000));

    // The two Rp 15,000 entries keep mask order
    assert_eq!(listing[1], ("Ayam".to_string(), 15000));
    assert_eq!(listing[2], ("Nasi + Es Teh".to_string(), 15000));
}

#[test]
fn test_totals_are_exact_and_within_budget() {
    let items = larger_menu();

    for budget in [0, 4999, 20000, 45000, 100000] {
        for combo in enumerate_combinations(&items, budget) {
            let expected: u64 = combo.members(&items).map(|item| item.price).sum();
            assert_eq!(combo.total, expected);
            assert_eq!(combo.total, subset_total(&items, combo.mask));
            assert!(combo.total as i64 <= budget);
            assert!(combo.mask != 0);
        }
    }
}

#[test]
fn test_results_sorted_by_total_descending() {
    let items = larger_menu();
    let combos = enumerate_combinations(&items, 40000);

    assert!(!combos.is_empty());
    for window in combos.windows(2) {
        assert!(
            window[0].total >= window[1].total,
            "Totals should not increase: {} -> {}",
            window[0].total,
            window[1].total
        );
        if window[0].total == window[1].total {
            assert!(window[0].mask < window[1].mask, "Ties should keep mask order");
        }
    }
}

#[test]
fn test_generous_budget_yields_every_subset() {
    let items = larger_menu();
    let all: u64 = items.iter().map(|item| item.price).sum();

    let combos = enumerate_combinations(&items, all as i64);

    assert_eq!(combos.len() as u64, subset_count(items.len()));
    assert_eq!(combos.len(), 1023);
    assert_eq!(combos[0].total, all);
}

#[test]
fn test_enumeration_is_idempotent() {
    let items = larger_menu();
    assert_eq!(
        enumerate_combinations(&items, 30000),
        enumerate_combinations(&items, 30000)
    );
}

#[test]
fn test_empty_input_is_invalid() {
    let err = MenuRequest::from_fields("", "20000").unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_zero_budget_yields_nothing() {
    assert!(enumerate_combinations(&larger_menu(), 0).is_empty());
}

#[test]
fn test_budget_below_cheapest_item_yields_nothing() {
    assert!(enumerate_combinations(&warung_menu(), 4999).is_empty());
}

#[test]
fn test_single_item_exact_budget() {
    let items = vec![Item::new("X", 100)];
    let combos = enumerate_combinations(&items, 100);

    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].names(&items), vec!["X"]);
    assert_eq!(combos[0].total, 100);
}

#[test]
fn test_price_sum_overflow_is_never_affordable() {
    let items = parse_items("A:18446744073709551615, B:2");
    assert_eq!(items.len(), 2);

    let combos = enumerate_combinations(&items, 5);

    assert_eq!(combos.len(), 1, "Only B fits; A + B must not wrap around");
    assert_eq!(combos[0].names(&items), vec!["B"]);
    assert_eq!(combos[0].total, 2);

    let everything = enumerate_combinations(&items, i64::MAX);
    assert!(everything.iter().all(|c| c.mask != 0b11));
}
