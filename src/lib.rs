//! Closed knight's tour search on square boards
//!
//! Two solvers decide whether a closed tour exists from a given start: an exhaustive
//! fixed-order backtracking search and a randomized single-pass Las Vegas walk. A trial
//! harness compares their empirical success rates over random starts.

#![forbid(unsafe_code)]

/// Success rate measurement across many independent trials
pub mod analysis;
/// Board state, coordinates and knight move generation
pub mod board;
/// Command-line interface, configuration, progress display and error handling
pub mod io;
/// Backtracking and Las Vegas tour solvers
pub mod solver;

pub use analysis::statistics::{TrialRunner, TrialStats, run_trials};
pub use board::{Board, Position};
pub use io::error::{Result, TourError};
pub use solver::{
    BacktrackingSolver, LasVegasSolver, TourOutcome, TourSolver, solve_backtracking,
    solve_las_vegas, solve_las_vegas_with,
};
