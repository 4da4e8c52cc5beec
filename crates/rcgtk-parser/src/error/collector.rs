//! Accumulates diagnostics across a dialog body so one run reports every
//! bad directive.

use crate::error::{Diagnostic, ParseError};

/// Diagnostics recorded while processing a dialog or an asset section.
///
/// ```
/// # use rcgtk_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(
///     Diagnostic::warning("`IDC_FOO` is not a known identifier").with_code(ErrorCode::W001),
/// );
///
/// let warnings = collector.finish().expect("warnings alone do not fail");
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.errors += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Everything emitted so far, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Ends collection.
    ///
    /// Returns the warnings when nothing fatal was emitted. Otherwise every
    /// diagnostic, warnings included, is returned inside the error so the
    /// report keeps the source order.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        match self.errors {
            0 => Ok(self.diagnostics),
            _ => Err(ParseError::new(self.diagnostics)),
        }
    }
}
