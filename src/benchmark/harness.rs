use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::benchmark::procedures::{iterative_enumeration, recursive_traversal};
use crate::constants::DEFAULT_REPETITIONS;
use crate::error::{MenuError, Result};
use crate::models::{ComplexityResult, Item};

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Runs per procedure per prefix size. Fixed, not adaptive.
    pub repetitions: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl BenchmarkConfig {
    pub fn new(repetitions: usize) -> Result<Self> {
        if repetitions == 0 {
            return Err(MenuError::InvalidInput(
                "Repetition count must be at least 1".to_string(),
            ));
        }
        Ok(Self { repetitions })
    }
}

/// Average duration of one run in milliseconds.
pub fn average_ms(elapsed: Duration, repetitions: usize) -> f64 {
    if repetitions == 0 {
        return 0.0;
    }
    elapsed.as_secs_f64() * 1000.0 / repetitions as f64
}

/// Run `procedure` `repetitions` times and return the average milliseconds per run.
pub fn time_procedure<F>(repetitions: usize, mut procedure: F) -> f64
where
    F: FnMut() -> u64,
{
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(procedure());
    }
    average_ms(start.elapsed(), repetitions)
}

/// Measure both strategies for every prefix length 1..=N.
///
/// Blocks until done; cost grows as `repetitions · n · 2^n`.
pub fn benchmark_complexity(items: &[Item], config: &BenchmarkConfig) -> Vec<ComplexityResult> {
    let repetitions = config.repetitions.max(1);
    let mut series = Vec::with_capacity(items.len());

    tracing::info!(items = items.len(), repetitions, "starting complexity benchmark");

    for n in 1..=items.len() {
        let prefix = &items[..n];

        let iterative_ms = time_procedure(repetitions, || iterative_enumeration(prefix));
        let recursive_ms = time_procedure(repetitions, || recursive_traversal(prefix.len()));

        tracing::debug!(size = n, iterative_ms, recursive_ms, "measured prefix");
        series.push(ComplexityResult::new(n, iterative_ms, recursive_ms));
    }

    tracing::info!(sizes = series.len(), "complexity benchmark finished");
    series
}
