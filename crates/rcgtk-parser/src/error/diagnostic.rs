//! Diagnostics: one reported problem with its location in the resource
//! script.

use std::fmt;

use crate::{error::ErrorCode, span::Span};

/// Whether a diagnostic stops the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The script no longer matches the expected grammar.
    Error,
    /// Output is still produced, with a verbatim identifier or a placeholder
    /// comment in place of the expected widget.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    pub fn is_warning(self) -> bool {
        self == Self::Warning
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a span of the script.
///
/// The primary label marks the offending text; secondary labels add context
/// such as where the dialog was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.primary
    }
}

/// An error or warning raised while reading a resource script.
///
/// Built with chained `with_*` calls:
///
/// ```
/// # use rcgtk_parser::{Span, error::{Diagnostic, ErrorCode}};
/// let diag = Diagnostic::warning("`IDC_FOO` is not a known identifier")
///     .with_code(ErrorCode::W001)
///     .with_label(Span::new(0..10), "used verbatim");
///
/// assert_eq!(diag.to_string(), "warning[W001]: `IDC_FOO` is not a known identifier");
/// ```
///
/// The CLI renders it against the script:
///
/// ```text
/// error[E102]: `COMBOBOX` expects at least 5 arguments, found 3
///   --> rufus.rc:88:5
///    |
/// 88 |     COMBOBOX IDC_DEVICE,8,30
///    |     ^^^^^^^^^^^^^^^^^^^^^^^^ in this directive
///    |
///    = help: expected `COMBOBOX id, x, y, width, height [, style [, extended-style]]`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message.into())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, message.into())
    }

    fn with_severity(severity: Severity, message: String) -> Self {
        Self {
            severity,
            code: None,
            message,
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Marks the offending text.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), true)
    }

    /// Points at related text, such as the dialog declaration.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), false)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn push_label(mut self, span: Span, message: String, primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            primary,
        });
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were added; the first is usually primary.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{code}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}
