use serde::{Deserialize, Serialize};

use crate::constants::{ITERATIVE_COMPLEXITY, RECURSIVE_COMPLEXITY};

/// Averaged latencies for one prefix size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityResult {
    /// Number of leading menu items measured.
    pub size: usize,

    /// Average milliseconds per full iterative enumeration.
    pub iterative_ms: f64,

    /// Average milliseconds per full recursive traversal.
    pub recursive_ms: f64,
}

impl ComplexityResult {
    pub fn new(size: usize, iterative_ms: f64, recursive_ms: f64) -> Self {
        Self {
            size,
            iterative_ms,
            recursive_ms,
        }
    }

    pub fn latency(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Iterative => self.iterative_ms,
            Strategy::Recursive => self.recursive_ms,
        }
    }
}

/// The two brute-force strategies being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Iterative,
    Recursive,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Iterative => "Iterative",
            Strategy::Recursive => "Recursive",
        }
    }

    /// Big-O label shown next to the final measurement.
    pub fn complexity(&self) -> &'static str {
        match self {
            Strategy::Iterative => ITERATIVE_COMPLEXITY,
            Strategy::Recursive => RECURSIVE_COMPLEXITY,
        }
    }
}
