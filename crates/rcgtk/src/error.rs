//! Error types for rcgtk operations.
//!
//! This module provides the main error type [`RcgtkError`] which wraps
//! the error conditions that can occur while converting a resource script.

use std::io;

use thiserror::Error;

use rcgtk_parser::ParseError;

/// The main error type for rcgtk operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the source text alongside the diagnostics so
/// callers can render labeled spans.
#[derive(Debug, Error)]
pub enum RcgtkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preprocessor error: {0}")]
    Preprocessor(String),
}

impl RcgtkError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
