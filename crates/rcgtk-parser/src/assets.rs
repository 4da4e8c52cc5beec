//! Scanning embedded binary resources.
//!
//! Resource scripts list raw data files as
//!
//! ```text
//! IDR_FD_COMMAND_COM      RCDATA                  "../res/freedos/COMMAND.COM"
//! ```
//!
//! Only the section after the `TEXTINCLUDE 3` marker is scanned; earlier
//! `RCDATA` mentions belong to design-time blocks.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, preceded},
    error::ModalResult,
    token::{take_till, take_while},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Marker comment that opens the generated resource section.
pub const DEFAULT_SECTION_MARKER: &str = "// Generated from the TEXTINCLUDE 3 resource.";

const RCDATA: &str = "RCDATA";

/// One `NAME RCDATA "location"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    alias: String,
    location: String,
    span: Span,
}

impl AssetEntry {
    pub fn new(alias: impl Into<String>, location: impl Into<String>, span: Span) -> Self {
        Self {
            alias: alias.into(),
            location: location.into(),
            span,
        }
    }

    /// The resource name, used as the file alias in the manifest.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The decoded file location, without quotes.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Collects the asset entries following the last `marker` in `source`.
///
/// The whole source is scanned when the marker is absent. Lines that do not
/// mention ` RCDATA ` are skipped.
///
/// # Errors
///
/// All malformed asset lines are reported together:
///
/// - `E120` when the word after the alias is not `RCDATA`.
/// - `E121` when the location is not a double-quoted string.
pub fn scan_assets(source: &str, marker: &str) -> Result<Vec<AssetEntry>, ParseError> {
    let section_start = source
        .rfind(marker)
        .map_or(0, |position| position + marker.len());

    let mut collector = DiagnosticCollector::new();
    let mut entries = Vec::new();
    let mut offset = section_start;

    for raw_line in source[section_start..].split_inclusive('\n') {
        let line_start = offset;
        offset += raw_line.len();

        if !raw_line.contains(" RCDATA ") {
            continue;
        }
        let line = raw_line.trim_end();
        let leading = line.len() - line.trim_start().len();
        let span = Span::new(line_start + leading..line_start + line.len());

        match asset_entry(line.trim_start(), span) {
            Ok(entry) => {
                trace!(alias = entry.alias(), location = entry.location(); "Asset entry");
                entries.push(entry);
            }
            Err(diagnostic) => collector.emit(diagnostic),
        }
    }

    collector.finish()?;
    debug!(assets = entries.len(); "Scanned asset section");
    Ok(entries)
}

fn asset_entry(line: &str, span: Span) -> Result<AssetEntry, Diagnostic> {
    let (alias, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim_start();
    let (kind, location) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));

    if kind != RCDATA {
        return Err(Diagnostic::error(format!(
            "unknown resource item `{kind}` for `{alias}`"
        ))
        .with_code(ErrorCode::E120)
        .with_label(span, "in this line")
        .with_help("only `NAME RCDATA \"path\"` entries are supported"));
    }

    let decoded = decode_escapes(location.trim());
    let Some(location) = decoded
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    else {
        return Err(Diagnostic::error(format!(
            "resource location of `{alias}` is not a quoted string"
        ))
        .with_code(ErrorCode::E121)
        .with_label(span, "in this line"));
    };

    Ok(AssetEntry::new(alias, location, span))
}

enum Fragment<'s> {
    Literal(&'s str),
    Escaped(char),
}

/// Decodes C-style backslash escapes; unknown escapes are kept as written.
pub fn decode_escapes(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut input = raw;
    while let Ok(fragment) = fragment.parse_next(&mut input) {
        match fragment {
            Fragment::Literal(text) => decoded.push_str(text),
            Fragment::Escaped(c) => decoded.push(c),
        }
    }
    decoded
}

fn fragment<'s>(input: &mut &'s str) -> ModalResult<Fragment<'s>> {
    alt((
        take_till(1.., '\\').map(Fragment::Literal),
        escape.map(Fragment::Escaped),
        "\\".map(Fragment::Literal),
    ))
    .parse_next(input)
}

fn escape(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '\\'.value('\\'),
            '"'.value('"'),
            '\''.value('\''),
            'n'.value('\n'),
            't'.value('\t'),
            'r'.value('\r'),
            preceded('x', take_while(2, |c: char| c.is_ascii_hexdigit()))
                .try_map(|digits| u8::from_str_radix(digits, 16))
                .map(char::from),
        )),
    )
    .parse_next(input)
}
