use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Combination, ComplexityResult, Item, Strategy};

#[derive(Debug, Serialize)]
struct RankedCombination<'a> {
    rank: usize,
    items: Vec<&'a str>,
    total: u64,
}

#[derive(Debug, Serialize)]
struct CombinationReport<'a> {
    budget: i64,
    count: usize,
    combinations: Vec<RankedCombination<'a>>,
}

#[derive(Debug, Serialize)]
struct ComplexityReport<'a> {
    iterative_complexity: &'static str,
    recursive_complexity: &'static str,
    series: &'a [ComplexityResult],
}

/// JSON document for a ranked combination listing.
pub fn combinations_json(
    items: &[Item],
    combos: &[Combination],
    budget: i64,
) -> Result<serde_json::Value> {
    let report = CombinationReport {
        budget,
        count: combos.len(),
        combinations: combos
            .iter()
            .enumerate()
            .map(|(i, combo)| RankedCombination {
                rank: i + 1,
                items: combo.names(items),
                total: combo.total,
            })
            .collect(),
    };
    Ok(serde_json::to_value(report)?)
}

/// JSON document for a benchmark series.
pub fn complexity_json(series: &[ComplexityResult]) -> Result<serde_json::Value> {
    let report = ComplexityReport {
        iterative_complexity: Strategy::Iterative.complexity(),
        recursive_complexity: Strategy::Recursive.complexity(),
        series,
    };
    Ok(serde_json::to_value(report)?)
}

/// Pretty-print a JSON document to `out`.
pub fn write_json<W: Write>(value: &serde_json::Value, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write the benchmark series as CSV (`size,iterative_ms,recursive_ms`).
pub fn write_series_csv<W: Write>(series: &[ComplexityResult], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["size", "iterative_ms", "recursive_ms"])?;
    for result in series {
        wtr.write_record([
            result.size.to_string(),
            format!("{:.6}", result.iterative_ms),
            format!("{:.6}", result.recursive_ms),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
