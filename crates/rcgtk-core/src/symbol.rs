//! Symbolic identifier table.
//!
//! Controls in a resource script refer to their identifiers by macro name
//! (`IDC_DEVICE`). The numeric values live in a C header and are recovered by
//! an external preprocessing step; this module only stores the result.

use std::collections::HashMap;

/// Read-only mapping from symbolic name to its raw value.
///
/// # Examples
///
/// ```
/// # use rcgtk_core::symbol::SymbolTable;
/// let table: SymbolTable = [("IDC_DEVICE", "1001")].into_iter().collect();
///
/// assert_eq!(table.get("IDC_DEVICE"), Some("1001"));
/// assert_eq!(table.get("IDC_MISSING"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, String>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a definition.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Looks up the raw value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SymbolTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}
