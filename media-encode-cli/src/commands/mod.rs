//! Command implementations for the CLI.

/// Module containing the batch re-encode run.
pub mod encode;
