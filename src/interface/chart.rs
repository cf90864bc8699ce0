use std::fmt::Write;

use crate::constants::{
    CHART_COLUMN_WIDTH, CHART_HEIGHT, ITERATIVE_GLYPH, OVERLAP_GLYPH, RECURSIVE_GLYPH,
};
use crate::models::{ComplexityResult, Strategy};

fn glyph(strategy: Strategy) -> char {
    match strategy {
        Strategy::Iterative => ITERATIVE_GLYPH,
        Strategy::Recursive => RECURSIVE_GLYPH,
    }
}

/// Row (0 = baseline) a latency lands on, scaled so `max` hits the top row.
fn scale_row(value: f64, max: f64, height: usize) -> usize {
    if height <= 1 || max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    (ratio * (height - 1) as f64).round() as usize
}

/// Plot both latency series against prefix size on a zero-based y axis.
pub fn render_chart(series: &[ComplexityResult]) -> String {
    let mut out = String::new();
    if series.is_empty() {
        return out;
    }

    let max = series
        .iter()
        .flat_map(|r| [r.iterative_ms, r.recursive_ms])
        .fold(0.0, f64::max);

    let width = series.len() * CHART_COLUMN_WIDTH;
    let mut grid = vec![vec![' '; width]; CHART_HEIGHT];

    for (col, result) in series.iter().enumerate() {
        let x = col * CHART_COLUMN_WIDTH + CHART_COLUMN_WIDTH / 2;
        for strategy in Strategy::ALL {
            let row = scale_row(result.latency(strategy), max, CHART_HEIGHT);
            let cell = &mut grid[CHART_HEIGHT - 1 - row][x];
            *cell = if *cell == ' ' { glyph(strategy) } else { OVERLAP_GLYPH };
        }
    }

    let top_label = format!("{:.6}", max);
    let zero_label = format!("{:.6}", 0.0);
    let label_width = top_label.len().max(zero_label.len());

    let _ = writeln!(out, "Latency per run (ms)");
    for (i, row) in grid.iter().enumerate() {
        let label = match i {
            0 => top_label.as_str(),
            _ if i == CHART_HEIGHT - 1 => zero_label.as_str(),
            _ => "",
        };
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{:>w$} |{}", label, line.trim_end(), w = label_width);
    }
    let _ = writeln!(out, "{:>w$} +{}", "", "-".repeat(width), w = label_width);

    let mut axis = String::with_capacity(width);
    for result in series {
        let _ = write!(axis, "{:^w$}", result.size, w = CHART_COLUMN_WIDTH);
    }
    let _ = writeln!(out, "{:>w$}  {}", "", axis.trim_end(), w = label_width);
    let _ = writeln!(out, "{:>w$}  items (n)", "", w = label_width);

    let legend: Vec<String> = Strategy::ALL
        .iter()
        .map(|s| format!("{} {} {}", glyph(*s), s.label(), s.complexity()))
        .collect();
    let _ = writeln!(out);
    let _ = writeln!(out, "Legend: {}   {} both", legend.join("   "), OVERLAP_GLYPH);

    out
}

/// Print the chart for a benchmark series.
pub fn display_chart(series: &[ComplexityResult]) {
    print!("{}", render_chart(series));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_row() {
        assert_eq!(scale_row(0.0, 2.0, 12), 0);
        assert_eq!(scale_row(2.0, 2.0, 12), 11);
        assert_eq!(scale_row(1.0, 2.0, 12), 6);
        assert_eq!(scale_row(1.0, 0.0, 12), 0);
    }

    #[test]
    fn test_render_chart_marks_both_series() {
        let series = vec![
            ComplexityResult::new(1, 0.0, 0.0),
            ComplexityResult::new(2, 1.0, 0.5),
            ComplexityResult::new(3, 4.0, 2.0),
        ];
        let chart = render_chart(&series);

        assert!(chart.contains("4.000000 |"));
        assert!(chart.contains(ITERATIVE_GLYPH));
        assert!(chart.contains(RECURSIVE_GLYPH));
        // Size 1 has both latencies at zero
        assert!(chart.contains(OVERLAP_GLYPH));
        assert!(chart.contains("Iterative O(n · 2ⁿ)"));
        assert!(chart.contains("Recursive O(2ⁿ)"));
    }

    #[test]
    fn test_render_chart_empty() {
        assert!(render_chart(&[]).is_empty());
    }
}
