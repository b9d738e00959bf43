//! Closed knight's tour solvers
//!
//! Both solvers are total: an off-board start yields a failed outcome carrying an
//! untouched board rather than an error.

/// Exhaustive depth-first search with rollback
pub mod backtracking;
/// Single-pass randomized walk
pub mod las_vegas;
/// Shared result type and solver abstraction
pub mod outcome;

pub use backtracking::{BacktrackingSolver, solve_backtracking};
pub use las_vegas::{LasVegasSolver, solve_las_vegas, solve_las_vegas_with};
pub use outcome::{TourOutcome, TourSolver};
