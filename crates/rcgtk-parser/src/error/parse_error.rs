//! The fatal error returned by the parser entry points.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

pub type Result<T> = std::result::Result<T, Diagnostic>;

/// One or more diagnostics that stopped a dialog parse, element validation
/// or manifest generation.
///
/// May also carry the warnings recorded before the failure.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Codes of the fatal diagnostics, in source order.
    pub fn error_codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error())
            .filter_map(Diagnostic::code)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self
            .diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error());
        let Some(first) = errors.next() else {
            return f.write_str("conversion failed");
        };

        write!(f, "{first}")?;
        match errors.count() {
            0 => Ok(()),
            more => write!(f, " (+{more} more)"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}
