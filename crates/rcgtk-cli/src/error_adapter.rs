//! miette rendering for rcgtk errors and warnings.
//!
//! A [`ParseError`](rcgtk_parser::ParseError) may hold several diagnostics;
//! each becomes its own [`Reportable`] so every bad directive is shown with
//! its own snippet. Conversion warnings go through the same path.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceCode, SourceSpan,
};

use rcgtk::RcgtkError;
use rcgtk_parser::error::{Diagnostic, Label};

/// Something the CLI can print through miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A script diagnostic, rendered against the script text.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// An I/O, configuration or preprocessor failure.
    Error(&'a RcgtkError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Self::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Diagnostic { .. } => None,
            Self::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Self::Error(err) => error_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display>),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Self::Diagnostic { diag, .. } if diag.severity().is_warning() => {
                Some(MietteSeverity::Warning)
            }
            _ => Some(MietteSeverity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            Self::Diagnostic { diag, .. } => diag.help()?,
            Self::Error(RcgtkError::Preprocessor(_)) => {
                "set `symbols.preprocessor` in the configuration or pass `--defines`"
            }
            Self::Error(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Self::Diagnostic { src, .. } => Some(src as &dyn SourceCode),
            Self::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Self::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }
        Some(Box::new(diag.labels().iter().map(labeled_span)))
    }
}

fn error_code(err: &RcgtkError) -> Option<&'static str> {
    match err {
        RcgtkError::Io(_) => Some("rcgtk::io"),
        RcgtkError::Parse { .. } => None,
        RcgtkError::Config(_) => Some("rcgtk::config"),
        RcgtkError::Preprocessor(_) => Some("rcgtk::preprocessor"),
    }
}

fn labeled_span(label: &Label) -> LabeledSpan {
    let span = SourceSpan::new(label.span().start().into(), label.span().len());
    let message = Some(label.message().to_string());
    if label.is_primary() {
        LabeledSpan::new_primary_with_span(message, span)
    } else {
        LabeledSpan::new_with_span(message, span)
    }
}

/// One reportable per diagnostic of a parse error; one for anything else.
pub fn to_reportables(err: &RcgtkError) -> Vec<Reportable<'_>> {
    match err {
        RcgtkError::Parse { err: parse_err, src } => warnings_to_reportables(parse_err.diagnostics(), src),
        _ => vec![Reportable::Error(err)],
    }
}

/// Wrap diagnostics for rendering against `src`.
pub fn warnings_to_reportables<'a>(diagnostics: &'a [Diagnostic], src: &'a str) -> Vec<Reportable<'a>> {
    diagnostics
        .iter()
        .map(|diag| Reportable::Diagnostic { diag, src })
        .collect()
}

/// Render with miette's graphical handler, falling back to the bare message.
pub fn render(reporter: &GraphicalReportHandler, reportable: &Reportable<'_>) -> String {
    let mut rendered = String::new();
    match reporter.render_report(&mut rendered, reportable) {
        Ok(()) => rendered,
        Err(_) => reportable.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rcgtk_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_each_diagnostic_is_reported() {
        let parse_err = ParseError::from(vec![
            Diagnostic::error("`LTEXT` expects at least 6 arguments, found 3")
                .with_code(ErrorCode::E102)
                .with_label(Span::new(0..5), "in this directive"),
            Diagnostic::error("`x` of `COMBOBOX` is not a number: `a`")
                .with_code(ErrorCode::E103)
                .with_label(Span::new(10..15), "in this directive"),
        ]);
        let err = RcgtkError::new_parse_error(parse_err, "LTEXT \"A\",IDC_A,1\nCOMBOBOX IDC_B,a,1,1,1");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(
            reportables[0].to_string(),
            "`LTEXT` expects at least 6 arguments, found 3"
        );
        assert_eq!(reportables[1].code().map(|c| c.to_string()), Some("E103".to_string()));
        assert_eq!(reportables[1].severity(), Some(MietteSeverity::Error));
    }

    #[test]
    fn test_preprocessor_error_has_help() {
        let err = RcgtkError::Preprocessor("`gcc` not found".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "Preprocessor error: `gcc` not found");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()),
            Some("rcgtk::preprocessor".to_string())
        );
        assert!(reportables[0].help().is_some());
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_warning_severity() {
        let warnings = vec![
            Diagnostic::warning("`IDC_X` is not defined in the symbol table")
                .with_code(ErrorCode::W001)
                .with_label(Span::new(10..15), "used verbatim"),
        ];

        let reportables = warnings_to_reportables(&warnings, "LTEXT \"A\",IDC_X,1,1,1,1");

        assert_eq!(reportables[0].severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_secondary_labels_are_not_primary() {
        let diag = Diagnostic::error("input ended before `END`")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(20..20), "input ends here")
            .with_secondary_label(Span::new(0..12), "dialog declared here");
        let reportable = Reportable::Diagnostic {
            diag: &diag,
            src: "IDD_X DIALOG\nBEGIN\n",
        };

        let labels: Vec<_> = reportable.labels().expect("labels").collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[1].label(), Some("dialog declared here"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_render_includes_code_and_message() {
        let diag = Diagnostic::error("input ended before `END`")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(0..5), "dialog declared here");
        let reportable = Reportable::Diagnostic {
            diag: &diag,
            src: "IDD_X DIALOG",
        };

        let rendered = render(&GraphicalReportHandler::new(), &reportable);

        assert!(rendered.contains("E101"));
        assert!(rendered.contains("input ended before `END`"));
    }
}
