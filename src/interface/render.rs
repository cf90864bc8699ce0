use std::fmt::Write;

use crate::constants::CURRENCY;
use crate::models::{Combination, ComplexityResult, Item, Strategy};

/// Notice shown instead of any computation when the input is unusable.
pub const INVALID_INPUT_NOTICE: &str = "Invalid menu input";

/// Format an integer with `,` thousands separators.
pub fn format_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount with the currency label.
pub fn format_money(value: impl Into<i128>) -> String {
    format!("{} {}", CURRENCY, format_thousands(value.into()))
}

/// Build the ranked listing of affordable combinations.
pub fn render_combinations(items: &[Item], combos: &[Combination], budget: i64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Menu combinations <= {} ===", format_money(budget));
    let _ = writeln!(out);

    if combos.is_empty() {
        let _ = writeln!(out, "No combination fits this budget.");
        return out;
    }

    let rank_width = combos.len().to_string().len();
    for (i, combo) in combos.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>width$}. {}",
            i + 1,
            combo.names(items).join(" + "),
            width = rank_width
        );
        let _ = writeln!(
            out,
            "{:>width$}  Total: {}",
            "",
            format_money(combo.total),
            width = rank_width
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} of {} combinations fit.", combos.len(), total_subsets(items));
    out
}

fn total_subsets(items: &[Item]) -> String {
    match u32::try_from(items.len()) {
        Ok(n) if n < 64 => format_thousands(((1u64 << n) - 1) as i128),
        _ => "2^N - 1".to_string(),
    }
}

/// Print the ranked listing of affordable combinations.
pub fn display_combinations(items: &[Item], combos: &[Combination], budget: i64) {
    print!("{}", render_combinations(items, combos, budget));
}

/// Print the invalid-input notice.
pub fn display_invalid_input(reason: &str) {
    println!("{}", INVALID_INPUT_NOTICE);
    println!("  {}", reason);
}

/// Summarize the largest measured size for each strategy.
pub fn render_complexity_summary(series: &[ComplexityResult]) -> String {
    let mut out = String::new();
    let Some(last) = series.last() else {
        let _ = writeln!(out, "No measurements.");
        return out;
    };

    let _ = writeln!(out, "=== Complexity analysis (n = {}) ===", last.size);
    for (i, strategy) in Strategy::ALL.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "---");
        }
        let _ = writeln!(out, "{} algorithm", strategy.label());
        let _ = writeln!(out, "  Time complexity: {}", strategy.complexity());
        let _ = writeln!(out, "  Running time: {:.6} ms", last.latency(*strategy));
    }
    out
}
