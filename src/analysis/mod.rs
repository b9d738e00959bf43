//! Empirical comparison of solvers

/// Trial harness and success rate aggregation
pub mod statistics;
