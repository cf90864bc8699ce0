pub mod chart;
pub mod export;
pub mod input;
pub mod render;

pub use chart::{display_chart, render_chart};
pub use export::{combinations_json, complexity_json, write_json, write_series_csv};
pub use input::{prompt_budget, prompt_items, read_budget, read_items, validate_items, MenuRequest};
pub use render::{
    display_combinations, display_invalid_input, format_money, format_thousands,
    render_combinations, render_complexity_summary, INVALID_INPUT_NOTICE,
};
