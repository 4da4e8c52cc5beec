//! Diagnostics for resource scripts.
//!
//! Every problem is a [`Diagnostic`] carrying a severity, an [`ErrorCode`],
//! labeled spans into the script and optional help. Entry points that stop
//! on the first problem return [`ParseError`]; the translator keeps going
//! and records into a [`DiagnosticCollector`] instead.
//!
//! ```
//! # use rcgtk_parser::{Span, error::{Diagnostic, ErrorCode}};
//! let diag = Diagnostic::error("`LTEXT` expects at least 6 arguments, found 4")
//!     .with_code(ErrorCode::E102)
//!     .with_label(Span::new(100..120), "in this directive")
//!     .with_help("expected `LTEXT text, id, x, y, width, height [, style]`");
//!
//! assert_eq!(diag.code(), Some(ErrorCode::E102));
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use parse_error::Result;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
