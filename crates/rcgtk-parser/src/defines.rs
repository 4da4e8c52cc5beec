//! Reading symbol values from a preprocessor define dump.
//!
//! The dump is the output of `gcc -E -dD resource.h`: ordinary preprocessed
//! text interleaved with one `#define NAME VALUE` line per macro.

use log::debug;
use rcgtk_core::symbol::SymbolTable;

const DEFINE: &str = "#define";

/// Builds a symbol table from every `#define` line of `dump`.
///
/// A line is split on single spaces. The second field is the name and the
/// remaining fields, concatenated without separator, are the value, so
/// `#define A 1 2` maps `A` to `"12"`. Other lines are ignored.
///
/// # Examples
///
/// ```
/// # use rcgtk_parser::parse_defines;
/// let table = parse_defines("# 1 \"resource.h\"\n#define IDC_DEVICE 1001\n");
/// assert_eq!(table.get("IDC_DEVICE"), Some("1001"));
/// ```
pub fn parse_defines(dump: &str) -> SymbolTable {
    let table: SymbolTable = dump
        .lines()
        .filter(|line| line.starts_with(DEFINE))
        .filter_map(|line| {
            let mut fields = line.split(' ').skip(1);
            let name = fields.next().filter(|name| !name.is_empty())?;
            Some((name, fields.collect::<String>()))
        })
        .collect();

    debug!(symbols = table.len(); "Parsed define dump");
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_concatenated() {
        let table = parse_defines("#define A 1 2\n#define B (WM_USER + 1)\n");

        assert_eq!(table.get("A"), Some("12"));
        assert_eq!(table.get("B"), Some("(WM_USER+1)"));
    }

    #[test]
    fn test_other_lines_are_ignored() {
        let dump = "# 1 \"resource.h\"\nint x;\n  #define INDENTED 1\n#define KEPT 2\n";
        let table = parse_defines(dump);

        assert_eq!(table.len(), 1);
        assert!(table.contains("KEPT"));
    }

    #[test]
    fn test_define_without_value() {
        let table = parse_defines("#define _RESOURCE_H\n");

        assert_eq!(table.get("_RESOURCE_H"), Some(""));
    }

    #[test]
    fn test_define_without_name_is_skipped() {
        let table = parse_defines("#define\n#define  DOUBLE_SPACE 1\n");

        assert!(table.is_empty());
    }

    #[test]
    fn test_later_definition_wins() {
        let table = parse_defines("#define A 1\n#define A 2\n");

        assert_eq!(table.get("A"), Some("2"));
    }
}
