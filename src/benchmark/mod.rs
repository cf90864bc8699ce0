pub mod harness;
pub mod procedures;

pub use harness::{average_ms, benchmark_complexity, time_procedure, BenchmarkConfig};
pub use procedures::{iterative_enumeration, recursive_traversal};
