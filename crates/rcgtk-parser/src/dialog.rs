//! Locating and reading one dialog block.
//!
//! A dialog block looks like:
//!
//! ```text
//! IDD_DIALOG DIALOGEX 12, 12, 232, 326
//! STYLE DS_SETFONT | WS_POPUP | WS_CAPTION
//! CAPTION "Rufus 3.22"
//! BEGIN
//!     LTEXT "Device",IDC_STATIC,8,6,22,8
//!     COMBOBOX IDC_DEVICE,8,30,196,10,CBS_DROPDOWNLIST
//! END
//! ```
//!
//! Everything between the declaration line and `BEGIN` is the header, the
//! directives between `BEGIN` and `END` are the body.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
    tokenizer::{Directive, DirectiveTokenizer, floor_char_boundary},
};

const BEGIN: &str = "BEGIN";
const END: &str = "END";
const DECLARATION_KEYWORDS: [&str; 2] = ["DIALOG", "DIALOGEX"];
const CAPTION: &str = "CAPTION";

/// A parsed dialog block: its header properties and ordered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDescriptor {
    id: String,
    header: IndexMap<String, Vec<String>>,
    body: Vec<Directive>,
    span: Span,
}

impl DialogDescriptor {
    /// The dialog identifier from the declaration line.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header properties in source order.
    ///
    /// The declaration line itself is stored under the dialog identifier.
    pub fn header(&self) -> &IndexMap<String, Vec<String>> {
        &self.header
    }

    /// Looks up a header property by name, ignoring case.
    pub fn property(&self, name: &str) -> Option<&[String]> {
        self.header
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, arguments)| arguments.as_slice())
    }

    /// The `CAPTION` text with its quotes removed.
    pub fn caption(&self) -> Option<&str> {
        self.property(CAPTION)
            .and_then(|arguments| arguments.first())
            .map(|caption| unquote(caption))
    }

    /// Body directives between `BEGIN` and `END`, in source order.
    pub fn body(&self) -> &[Directive] {
        &self.body
    }

    /// Source range from the declaration line through `END`.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Strips one pair of surrounding double quotes, if present.
pub fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

/// Returns the byte offset of the first occurrence of `needle`.
///
/// The offset is typically passed to [`parse_dialog_block`] as the
/// approximate position of the dialog.
///
/// # Errors
///
/// Returns an `E111` diagnostic if `needle` does not occur in `source`.
pub fn locate_anchor(source: &str, needle: &str) -> Result<usize, ParseError> {
    source.find(needle).ok_or_else(|| {
        Diagnostic::error(format!("anchor text `{needle}` not found"))
            .with_code(ErrorCode::E111)
            .with_label(Span::new(0..source.len()), "searched this file")
            .with_help("pass the text of a line inside the dialog header, such as its CAPTION")
            .into()
    })
}

/// Parses the dialog block declared at or before `approximate_index`.
///
/// The search walks backward line by line, starting with the line containing
/// `approximate_index`, for a line whose second word is `DIALOG` or
/// `DIALOGEX`. When `dialog_id` is given the first word must match it too.
///
/// # Errors
///
/// - `E110` when no declaration precedes the index.
/// - `E101` when the input ends before `BEGIN` or `END`.
pub fn parse_dialog_block(
    source: &str,
    approximate_index: usize,
    dialog_id: Option<&str>,
) -> Result<DialogDescriptor, ParseError> {
    let index = floor_char_boundary(source, approximate_index);
    let (anchor, id) = find_declaration(source, index, dialog_id).ok_or_else(|| {
        let wanted = match dialog_id {
            Some(id) => format!("`{id} DIALOG`"),
            None => "a `DIALOG` or `DIALOGEX`".to_string(),
        };
        Diagnostic::error(format!("no {wanted} declaration found before the anchor"))
            .with_code(ErrorCode::E110)
            .with_label(Span::new(index..index), "searched backward from here")
    })?;
    debug!(id, offset = anchor; "Found dialog declaration");

    let mut tokenizer = DirectiveTokenizer::starting_at(source, anchor);
    let mut header = IndexMap::new();
    loop {
        let Some(directive) = tokenizer.next_directive() else {
            return Err(incomplete(source, anchor, BEGIN).into());
        };
        if directive.is(BEGIN) {
            break;
        }
        trace!(directive:?; "Header directive");
        if !directive.arguments().is_empty() {
            let (name, arguments) = directive.into_parts();
            insert_property(&mut header, name, arguments);
        }
    }

    let mut body = Vec::new();
    let end = loop {
        let Some(directive) = tokenizer.next_directive() else {
            return Err(incomplete(source, anchor, END).into());
        };
        if directive.is(END) {
            break directive.span().end();
        }
        trace!(directive:?; "Body directive");
        body.push(directive);
    };

    debug!(
        id,
        properties = header.len(),
        elements = body.len();
        "Parsed dialog block"
    );

    Ok(DialogDescriptor {
        id: id.to_string(),
        header,
        body,
        span: Span::new(anchor..end),
    })
}

/// Header names are case-insensitive; a repeated property keeps its first
/// position and spelling and takes the later value.
fn insert_property(header: &mut IndexMap<String, Vec<String>>, name: String, arguments: Vec<String>) {
    match header.keys().position(|key| key.eq_ignore_ascii_case(&name)) {
        Some(index) => header[index] = arguments,
        None => {
            header.insert(name, arguments);
        }
    }
}

/// Walk backward from the line containing `index` to a declaration line.
///
/// Returns the offset of the line start and the dialog identifier.
fn find_declaration<'src>(
    source: &'src str,
    index: usize,
    dialog_id: Option<&str>,
) -> Option<(usize, &'src str)> {
    let mut line_end = source[index..]
        .find('\n')
        .map_or(source.len(), |offset| index + offset);

    loop {
        let line_start = source[..line_end].rfind('\n').map_or(0, |offset| offset + 1);
        if let Some(id) = declared_id(&source[line_start..line_end], dialog_id) {
            return Some((line_start, id));
        }
        if line_start == 0 {
            return None;
        }
        line_end = line_start - 1;
    }
}

fn declared_id<'src>(line: &'src str, dialog_id: Option<&str>) -> Option<&'src str> {
    let mut words = line.split_whitespace();
    let id = words.next()?;
    let keyword = words.next()?;

    let is_declaration = DECLARATION_KEYWORDS
        .iter()
        .any(|candidate| keyword.eq_ignore_ascii_case(candidate));
    let id_matches = dialog_id.is_none_or(|wanted| wanted == id);

    (is_declaration && id_matches).then_some(id)
}

fn incomplete(source: &str, anchor: usize, missing: &str) -> Diagnostic {
    let declaration_end = source[anchor..]
        .find('\n')
        .map_or(source.len(), |offset| anchor + offset);

    Diagnostic::error(format!("input ended before `{missing}`"))
        .with_code(ErrorCode::E101)
        .with_label(Span::new(source.len()..source.len()), "input ends here")
        .with_secondary_label(Span::new(anchor..declaration_end), "dialog declared here")
        .with_help(format!("close the dialog block with `{missing}`"))
}
