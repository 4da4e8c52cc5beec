//! Identifier resolution against the symbol table.

use log::debug;

use rcgtk_core::symbol::SymbolTable;
use rcgtk_parser::{
    Span,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
};

/// Maps symbolic control identifiers to widget ids.
///
/// A known name resolves to `prefix + value`. An unknown name is kept as
/// written and a `W001` warning is recorded, so translation never stops on
/// a missing identifier.
#[derive(Debug, Clone)]
pub struct SymbolResolver {
    table: SymbolTable,
    prefix: String,
}

impl SymbolResolver {
    pub fn new(table: SymbolTable, prefix: impl Into<String>) -> Self {
        Self {
            table,
            prefix: prefix.into(),
        }
    }

    /// Resolves `name`, recording a warning against `span` when unknown.
    pub fn resolve(&self, name: &str, span: Span, diagnostics: &mut DiagnosticCollector) -> String {
        if let Some(value) = self.table.get(name) {
            return format!("{}{value}", self.prefix);
        }

        debug!(name; "Unresolved identifier");
        diagnostics.emit(
            Diagnostic::warning(format!("`{name}` is not defined in the symbol table"))
                .with_code(ErrorCode::W001)
                .with_label(span, "used verbatim as widget id")
                .with_help("pass the header that defines it with `--header` or `--defines`"),
        );
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> SymbolResolver {
        SymbolResolver::new([("IDC_DEVICE", "1001")].into_iter().collect(), "ID_")
    }

    #[test]
    fn test_known_identifier() {
        let mut diagnostics = DiagnosticCollector::new();

        let id = resolver().resolve("IDC_DEVICE", Span::default(), &mut diagnostics);

        assert_eq!(id, "ID_1001");
        assert!(diagnostics.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_identifier_is_verbatim_with_warning() {
        let mut diagnostics = DiagnosticCollector::new();

        let id = resolver().resolve("IDC_MISSING", Span::new(3..14), &mut diagnostics);

        assert_eq!(id, "IDC_MISSING");
        assert!(!diagnostics.has_errors());
        let warning = &diagnostics.diagnostics()[0];
        assert_eq!(warning.code(), Some(ErrorCode::W001));
        assert!(warning.severity().is_warning());
    }

    #[test]
    fn test_custom_prefix() {
        let resolver = SymbolResolver::new([("IDOK", "1")].into_iter().collect(), "RES_");
        let mut diagnostics = DiagnosticCollector::new();

        assert_eq!(resolver.resolve("IDOK", Span::default(), &mut diagnostics), "RES_1");
    }
}
