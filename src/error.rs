//! Error types for the breadboard simulator core.
//!
//! This module provides a unified error type [`BreadboardError`] covering
//! translation and numeric-solve failures. Errors never escape the
//! [`simulate`](crate::sim::simulate) entry point; they are caught there and
//! degraded into a conservative [`SimulationResult`](crate::sim::SimulationResult).

use thiserror::Error;

/// Result type alias using [`BreadboardError`].
pub type Result<T> = std::result::Result<T, BreadboardError>;

/// Unified error type for all breadboard core operations.
#[derive(Error, Debug)]
pub enum BreadboardError {
    // ============ Translation Errors ============
    /// Circuit has no components or no terminal nodes
    #[error("Circuit is empty - nothing to simulate")]
    EmptyCircuit,

    /// No battery minus terminal exists to anchor the 0 V reference
    #[error("Circuit has no ground reference (no battery minus terminal)")]
    MissingGround,

    // ============ Solve Errors ============
    /// Matrix is singular and cannot be solved
    #[error("Singular matrix - circuit may have a short circuit or floating net")]
    SingularMatrix,
}
