/// Number of times each benchmark procedure is repeated per prefix size.
pub const DEFAULT_REPETITIONS: usize = 1500;

/// Widest item list a `u64` mask can index without overflowing `1 << n`.
pub const MAX_ITEMS: usize = 63;

/// Currency label used in listings.
pub const CURRENCY: &str = "Rp";

/// Menu offered as the default answer to the items prompt.
pub const SAMPLE_MENU: &str = "Nasi:10000, Ayam:15000, Es Teh:5000";

/// Budget offered as the default answer to the budget prompt.
pub const SAMPLE_BUDGET: &str = "20000";

// ─────────────────────────────────────────────────────────────────────────────
// Complexity labels
// ─────────────────────────────────────────────────────────────────────────────

/// Big-O of the iterative bit-mask enumeration.
pub const ITERATIVE_COMPLEXITY: &str = "O(n · 2ⁿ)";

/// Big-O of the recursive include/exclude traversal.
pub const RECURSIVE_COMPLEXITY: &str = "O(2ⁿ)";

// ─────────────────────────────────────────────────────────────────────────────
// Sample menu generator
// ─────────────────────────────────────────────────────────────────────────────

/// Price range (inclusive) for generated menu items.
pub const RANDOM_PRICE_MIN: u64 = 1_000;
pub const RANDOM_PRICE_MAX: u64 = 50_000;

/// Generated prices are rounded to this step.
pub const RANDOM_PRICE_STEP: u64 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Chart layout
// ─────────────────────────────────────────────────────────────────────────────

/// Rows in the terminal chart plot area.
pub const CHART_HEIGHT: usize = 12;

/// Columns used per prefix size on the x axis.
pub const CHART_COLUMN_WIDTH: usize = 4;

/// Glyph for the iterative series.
pub const ITERATIVE_GLYPH: char = '*';

/// Glyph for the recursive series.
pub const RECURSIVE_GLYPH: char = 'o';

/// Glyph when both series land on the same cell.
pub const OVERLAP_GLYPH: char = '#';
