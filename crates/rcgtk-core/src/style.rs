//! Style flag lists.
//!
//! Resource scripts combine window and control styles with `|`, for example
//! `WS_TABSTOP | NOT WS_VISIBLE`. [`StyleFlags`] splits such a list into
//! normalized tokens so membership checks do not depend on spacing.

use std::fmt;

/// A parsed `|`-joined style flag list.
///
/// Each token has its surrounding whitespace trimmed and inner whitespace
/// runs collapsed to a single space, so `NOT  WS_VISIBLE` and
/// `NOT WS_VISIBLE` compare equal. Empty tokens are dropped.
///
/// # Examples
///
/// ```
/// # use rcgtk_core::style::StyleFlags;
/// let flags = StyleFlags::parse("BS_AUTOCHECKBOX | WS_TABSTOP");
/// assert!(flags.contains(StyleFlags::AUTO_CHECKBOX));
/// assert!(flags.is_visible());
/// assert_eq!(flags.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFlags {
    flags: Vec<String>,
}

impl StyleFlags {
    /// Separator between flags.
    pub const SEPARATOR: char = '|';

    /// Marks an element hidden at startup.
    pub const NOT_VISIBLE: &'static str = "NOT WS_VISIBLE";

    /// Includes the element in the keyboard focus order.
    pub const TAB_STOP: &'static str = "WS_TABSTOP";

    /// Turns a button-class control into a checkbox.
    pub const AUTO_CHECKBOX: &'static str = "BS_AUTOCHECKBOX";

    /// Prevents editing of an edit control.
    pub const READ_ONLY: &'static str = "ES_READONLY";

    /// Parses a raw style argument.
    pub fn parse(raw: &str) -> Self {
        let flags = raw
            .split(Self::SEPARATOR)
            .map(|flag| flag.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|flag| !flag.is_empty())
            .collect();
        Self { flags }
    }

    /// Returns `true` if `flag` is one of the tokens.
    pub fn contains(&self, flag: &str) -> bool {
        self.flags.iter().any(|candidate| candidate == flag)
    }

    /// Returns `true` unless the list hides the element.
    pub fn is_visible(&self) -> bool {
        !self.contains(Self::NOT_VISIBLE)
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}

impl fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flags.join(" | "))
    }
}
