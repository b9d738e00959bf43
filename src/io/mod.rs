//! Input/output, configuration and error handling

/// Command-line argument parsing and command execution
pub mod cli;
/// Solver limits and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Progress display for trial batches
pub mod progress;
