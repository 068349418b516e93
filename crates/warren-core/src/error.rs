//! Foundation error type.
//!
//! Grid and agent operations are total (silent refusal, never failure), so
//! the only fallible surfaces live at the shell boundary: configuration
//! validation here, and run-state transitions in `warren-sim`, which wraps
//! this type as one variant.

use thiserror::Error;

/// The base error type for `warren-*` crates.
#[derive(Debug, Error)]
pub enum WarrenError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `warren-core` surfaces.
pub type WarrenResult<T> = Result<T, WarrenError>;
