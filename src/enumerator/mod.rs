pub mod combinations;

pub use combinations::{enumerate_combinations, fits_budget, subset_count, subset_total};
