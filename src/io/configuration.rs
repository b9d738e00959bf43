//! Solver limits and runtime configuration defaults

/// Side length of the standard chessboard
pub const DEFAULT_BOARD_SIZE: usize = 8;

// Keeps backtracking recursion depth (size squared) well inside the default thread stack
/// Maximum accepted board side length
pub const MAX_BOARD_SIZE: usize = 32;

/// Default number of trials for success rate measurement
pub const DEFAULT_TRIALS: usize = 10_000;

// Exhaustive search from an unlucky 8x8 start does not finish in practical time
/// Node budget applied to each backtracking trial unless exhaustive search is requested
pub const DEFAULT_TRIAL_NODE_BUDGET: u64 = 5_000_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
