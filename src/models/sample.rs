use rand::Rng;

use crate::constants::{RANDOM_PRICE_MAX, RANDOM_PRICE_MIN, RANDOM_PRICE_STEP};
use crate::models::Item;

/// Build a demo menu of `count` items with step-rounded random prices.
pub fn random_menu(rng: &mut impl Rng, count: usize) -> Vec<Item> {
    let steps_min = RANDOM_PRICE_MIN / RANDOM_PRICE_STEP;
    let steps_max = RANDOM_PRICE_MAX / RANDOM_PRICE_STEP;

    (1..=count)
        .map(|i| {
            let price = rng.gen_range(steps_min..=steps_max) * RANDOM_PRICE_STEP;
            Item::new(format!("Menu {}", i), price)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_menu_shape() {
        let mut rng = StdRng::seed_from_u64(123);
        let items = random_menu(&mut rng, 8);

        assert_eq!(items.len(), 8);
        assert_eq!(items[0].name, "Menu 1");
        for item in &items {
            assert!((RANDOM_PRICE_MIN..=RANDOM_PRICE_MAX).contains(&item.price));
            assert_eq!(item.price % RANDOM_PRICE_STEP, 0);
        }
    }

    #[test]
    fn test_random_menu_is_seeded() {
        let a = random_menu(&mut StdRng::seed_from_u64(7), 5);
        let b = random_menu(&mut StdRng::seed_from_u64(7), 5);
        assert_eq!(a, b);
    }
}
