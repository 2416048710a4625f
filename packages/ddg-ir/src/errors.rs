//! Error types for ddg-ir
//!
//! Provides unified error handling across the crate.
//!
//! The taxonomy is deliberately narrow: recoverable errors exist only at
//! the region-validation boundary. Violations of the construction contract
//! (reading instructions from an empty node, connecting a node that is not
//! part of the graph, creating an `Unknown`-kind edge) are programming
//! defects and abort via `assert!` instead of returning an error value.

use thiserror::Error;

/// Main error type for ddg-ir operations
#[derive(Debug, Error)]
pub enum DDGError {
    /// Region has no instructions, so no graph can be built over it
    #[error("empty region: {0}")]
    EmptyRegion(String),

    /// Two instructions in the region define the same value name.
    /// Def-use construction relies on single-assignment value names.
    #[error("duplicate definition of '{name}' in region '{region}'")]
    DuplicateDefinition { region: String, name: String },

    /// Serialization error when converting a graph to/from its DTO form
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for ddg-ir operations
pub type Result<T> = std::result::Result<T, DDGError>;
