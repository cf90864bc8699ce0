pub mod combination;
pub mod complexity;
pub mod item;
pub mod sample;

pub use combination::{mask_contains, Combination};
pub use complexity::{ComplexityResult, Strategy};
pub use item::{parse_budget, parse_items, Item};
pub use sample::random_menu;
