//! Directive tokenizer for resource scripts.
//!
//! A resource script is line oriented: each directive is a name followed by a
//! comma-separated argument list. Two details make it more than a
//! `split(',')`:
//!
//! - quoted text may itself contain commas (`"Hello, world"`), and
//! - a line that ends with a separator continues on the next line.
//!
//! [`DirectiveTokenizer`] walks the source one directive at a time and keeps
//! byte offsets so every [`Directive`] knows where it came from.

use winnow::{
    Parser as _,
    ascii::{line_ending, multispace0, space0},
    combinator::{alt, eof, opt},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::take_till,
};

use crate::span::Span;

/// Separates arguments of a directive.
pub const SEPARATOR: char = ',';

/// Opens and closes quoted text; separators inside quotes do not split.
pub const QUOTE: char = '"';

type Input<'src> = LocatingSlice<&'src str>;

/// One logical line of a resource script: a name and its raw arguments.
///
/// Arguments are kept as written (quotes included) and trimmed of surrounding
/// whitespace. Their meaning depends on the directive name and is assigned
/// later by [`elaborate`](crate::elaborate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    name: String,
    arguments: Vec<String>,
    span: Span,
}

impl Directive {
    pub fn new(name: impl Into<String>, arguments: Vec<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            arguments,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns the argument at `index`, if present.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// Source range from the first character of the name to the last
    /// non-whitespace character of the arguments.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Case-insensitive comparison of the directive name.
    pub fn is(&self, keyword: &str) -> bool {
        self.name.eq_ignore_ascii_case(keyword)
    }

    /// Replaces the argument at `index`. Returns `false` if there is no such
    /// argument.
    pub fn set_argument(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.arguments.get_mut(index) {
            Some(argument) => {
                *argument = value.into();
                true
            }
            None => false,
        }
    }

    /// Consumes the directive, returning its name and arguments.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.arguments)
    }
}

/// A cursor over the directives of a source text.
///
/// Each call to [`next_directive`](Self::next_directive) consumes one logical
/// line (possibly spanning several physical lines) and leaves the cursor just
/// past it; [`remaining`](Self::remaining) exposes the unconsumed text.
///
/// # Examples
///
/// ```
/// # use rcgtk_parser::DirectiveTokenizer;
/// let mut tokenizer = DirectiveTokenizer::new("LTEXT \"Hello, world\",IDC_LBL,1,2,3,4\nEND\n");
///
/// let directive = tokenizer.next_directive().expect("one directive");
/// assert_eq!(directive.name(), "LTEXT");
/// assert_eq!(directive.arguments(), ["\"Hello, world\"", "IDC_LBL", "1", "2", "3", "4"]);
/// assert_eq!(tokenizer.remaining(), "END\n");
/// ```
#[derive(Debug, Clone)]
pub struct DirectiveTokenizer<'src> {
    source: &'src str,
    input: Input<'src>,
}

impl<'src> DirectiveTokenizer<'src> {
    /// Creates a tokenizer at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self::starting_at(source, 0)
    }

    /// Creates a tokenizer positioned at byte `offset` of `source`.
    ///
    /// Spans of the produced directives stay relative to the whole source.
    /// An offset inside a multi-byte character is moved back to the start of
    /// that character.
    pub fn starting_at(source: &'src str, offset: usize) -> Self {
        let mut input = LocatingSlice::new(source);
        let _ = input.next_slice(floor_char_boundary(source, offset));
        Self { source, input }
    }

    /// Byte offset of the cursor in the source.
    pub fn offset(&self) -> usize {
        self.input.current_token_start()
    }

    /// The text not yet consumed.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.offset()..]
    }

    /// Reads the next directive, or `None` once only whitespace remains.
    pub fn next_directive(&mut self) -> Option<Directive> {
        directive(&mut self.input).ok().flatten()
    }
}

impl Iterator for DirectiveTokenizer<'_> {
    type Item = Directive;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_directive()
    }
}

/// Tokenizes every directive of `source`.
pub fn tokenize(source: &str) -> Vec<Directive> {
    DirectiveTokenizer::new(source).collect()
}

/// Returns the largest char boundary not greater than `offset`.
pub(crate) fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Skip whitespace, including blank lines, before a directive.
fn blank<'src>(input: &mut Input<'src>) -> ModalResult<()> {
    multispace0.void().parse_next(input)
}

/// The leading run of non-whitespace characters.
fn directive_name<'src>(input: &mut Input<'src>) -> ModalResult<&'src str> {
    take_till(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Trailing horizontal whitespace followed by a line ending or end of input.
fn end_of_line<'src>(input: &mut Input<'src>) -> ModalResult<()> {
    (space0, alt((line_ending, eof))).void().parse_next(input)
}

fn directive<'src>(input: &mut Input<'src>) -> ModalResult<Option<Directive>> {
    blank.parse_next(input)?;
    if input.eof_offset() == 0 {
        return Ok(None);
    }

    let start = input.current_token_start();
    let name = directive_name.parse_next(input)?;
    let mut end = input.current_token_start();

    let arguments = if opt(end_of_line).parse_next(input)?.is_some() {
        Vec::new()
    } else {
        argument_list(input, &mut end)
    };

    Ok(Some(Directive::new(name, arguments, Span::new(start..end))))
}

/// Scan the argument list up to the end of the logical line.
///
/// `end` is advanced past every non-whitespace character consumed.
fn argument_list(input: &mut Input<'_>, end: &mut usize) -> Vec<String> {
    let mut arguments = vec![String::new()];
    let mut in_quote = false;
    let mut after_separator = false;

    while let Some(c) = input.next_token() {
        match c {
            '\n' if !after_separator => break,
            // CRLF input must continue lines the same way LF input does.
            '\r' => {}
            SEPARATOR if !in_quote => {
                arguments.push(String::new());
                after_separator = true;
            }
            _ => {
                if c == QUOTE {
                    in_quote = !in_quote;
                }
                if let Some(current) = arguments.last_mut() {
                    current.push(c);
                }
                after_separator = false;
            }
        }

        if !c.is_whitespace() {
            *end = input.current_token_start();
        }
    }

    arguments
        .into_iter()
        .map(|argument| argument.trim().to_string())
        .collect()
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Label text containing separators and spaces but no quotes or newlines.
    fn label_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ,.&|]{0,24}"
    }

    fn check_quoted_argument_is_intact(text: String) -> Result<(), TestCaseError> {
        let source = format!("LTEXT \"{text}\",IDC_LBL,1,2,3,4\n");
        let directives = tokenize(&source);

        prop_assert_eq!(directives.len(), 1);
        prop_assert_eq!(directives[0].arguments().len(), 6);
        let expected = format!("\"{text}\"");
        prop_assert_eq!(directives[0].argument(0), Some(expected.as_str()));
        Ok(())
    }

    proptest! {
        #[test]
        fn quoted_argument_is_intact(text in label_strategy()) {
            check_quoted_argument_is_intact(text)?;
        }
    }
}
