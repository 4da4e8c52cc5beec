//! Error codes for the rcgtk diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Dialog block errors
//! - `E12x` - Asset manifest errors
//! - `Wxxx` - Recoverable translation warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Dialog Block Errors (E1xx)
    // =========================================================================
    /// Incomplete input.
    ///
    /// The input ended before the `BEGIN` or `END` marker of the dialog block.
    E101,

    /// Argument count mismatch.
    ///
    /// A control directive has fewer or more arguments than its kind accepts.
    E102,

    /// Invalid numeric argument.
    ///
    /// A coordinate or extent argument is not an integer.
    E103,

    /// Dialog declaration not found.
    ///
    /// No `<ID> DIALOG` or `<ID> DIALOGEX` line precedes the anchor.
    E110,

    /// Anchor text not found.
    ///
    /// The text used to locate the dialog does not occur in the source.
    E111,

    // =========================================================================
    // Asset Manifest Errors (E12x)
    // =========================================================================
    /// Unknown resource item.
    ///
    /// A line mentioning `RCDATA` does not have it as its resource type.
    E120,

    /// Invalid resource location.
    ///
    /// The location of an `RCDATA` resource is not a quoted string.
    E121,

    /// Unexpected resource location prefix.
    ///
    /// The location does not start with the configured source prefix.
    E122,

    // =========================================================================
    // Translation Warnings (Wxxx)
    // =========================================================================
    /// Unresolved identifier.
    ///
    /// A control identifier is missing from the symbol table and was used
    /// verbatim.
    W001,

    /// Unsupported control style.
    ///
    /// A `CONTROL` directive has a class or style combination without a
    /// widget counterpart.
    W002,

    /// Unsupported element.
    ///
    /// A body directive kind has no widget counterpart.
    W003,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E110 => "E110",
            ErrorCode::E111 => "E111",
            ErrorCode::E120 => "E120",
            ErrorCode::E121 => "E121",
            ErrorCode::E122 => "E122",
            ErrorCode::W001 => "W001",
            ErrorCode::W002 => "W002",
            ErrorCode::W003 => "W003",
        }
    }

    /// Returns `true` for codes that mark a widget placeholder in the output.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ErrorCode::W002 | ErrorCode::W003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
