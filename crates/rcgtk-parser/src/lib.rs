//! # rcgtk Parser
//!
//! Parser for the subset of Windows resource scripts (`.rc`) needed to
//! convert one dialog and its embedded assets. This crate turns source text
//! into typed values; it performs no I/O.
//!
//! ## Usage
//!
//! ```
//! # use rcgtk_parser::{ParseError, elaborate, locate_anchor, parse_dialog_block};
//! # use rcgtk_core::semantic::Element;
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//! IDD_DIALOG DIALOGEX 12, 12, 232, 326
//! CAPTION "Rufus 3.22"
//! BEGIN
//!     LTEXT "Device",IDC_STATIC,8,6,22,8
//! END
//! "#;
//!
//!     let anchor = locate_anchor(source, "CAPTION \"Rufus")?;
//!     let dialog = parse_dialog_block(source, anchor, Some("IDD_DIALOG"))?;
//!     let element = elaborate(&dialog.body()[0])?;
//!     assert!(matches!(element, Element::Label(_)));
//!     Ok(())
//! }
//! ```

mod assets;
mod defines;
mod dialog;
mod elaborate;
pub mod error;
mod span;
mod tokenizer;

pub use assets::{AssetEntry, DEFAULT_SECTION_MARKER, decode_escapes, scan_assets};
pub use defines::parse_defines;
pub use dialog::{DialogDescriptor, locate_anchor, parse_dialog_block, unquote};
pub use elaborate::elaborate;
pub use error::{Diagnostic, ErrorCode, ParseError};
pub use span::Span;
pub use tokenizer::{Directive, DirectiveTokenizer, QUOTE, SEPARATOR, tokenize};
