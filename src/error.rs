//! Error types surfaced by the external collaborators.
//!
//! The rule engine itself has no fatal error class: structural mismatches
//! and lookup misses are skip-and-continue conditions, never `Err`s. The
//! only fallible surface is the parsing pipeline behind the
//! [`crate::Parser`] trait.

use thiserror::Error;

/// Errors from the parsing pipeline.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The parser could not produce a tree for the input.
    #[error("failed to parse {text:?}: {message}")]
    Parse { text: String, message: String },

    /// The input had no tokens to analyze.
    #[error("sentence has no tokens")]
    Empty,
}

/// Result type for operations that go through the parsing pipeline.
pub type ParseResult<T> = Result<T, ParseError>;
