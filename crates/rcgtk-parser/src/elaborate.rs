//! Conversion of raw directives into typed dialog elements.
//!
//! Each supported directive kind has a fixed positional schema. The
//! arguments are checked against it once, here, so the translator works with
//! named fields instead of indices.

use rcgtk_core::{
    geometry::SourceRect,
    semantic::{
        ButtonControl, ComboBoxControl, EditControl, Element, GenericControl, LabelControl,
        TextAlign,
    },
    style::StyleFlags,
};

use crate::{
    dialog::unquote,
    error::{Diagnostic, ErrorCode, Result},
    tokenizer::Directive,
};

/// Positional layout of one directive kind.
struct Schema {
    fields: &'static [&'static str],
    required: usize,
}

impl Schema {
    fn signature(&self, name: &str) -> String {
        let (required, optional) = self.fields.split_at(self.required);
        let mut signature = format!("{name} {}", required.join(", "));
        for field in optional {
            signature.push_str(&format!(" [, {field}"));
        }
        signature.push_str(&"]".repeat(optional.len()));
        signature
    }
}

const TEXT_SCHEMA: Schema = Schema {
    fields: &[
        "text", "id", "x", "y", "width", "height", "style", "extended-style",
    ],
    required: 6,
};

const ID_SCHEMA: Schema = Schema {
    fields: &["id", "x", "y", "width", "height", "style", "extended-style"],
    required: 5,
};

const CONTROL_SCHEMA: Schema = Schema {
    fields: &[
        "text", "id", "class", "style", "x", "y", "width", "height", "extended-style",
    ],
    required: 8,
};

/// Arguments of one directive, validated against a schema.
struct Fields<'a> {
    directive: &'a Directive,
}

impl<'a> Fields<'a> {
    fn check(directive: &'a Directive, schema: &Schema) -> Result<Self> {
        let found = directive.arguments().len();
        if (schema.required..=schema.fields.len()).contains(&found) {
            return Ok(Self { directive });
        }

        let expected = if found < schema.required {
            format!("at least {}", schema.required)
        } else {
            format!("at most {}", schema.fields.len())
        };
        Err(Diagnostic::error(format!(
            "`{}` expects {expected} arguments, found {found}",
            directive.name()
        ))
        .with_code(ErrorCode::E102)
        .with_label(directive.span(), "in this directive")
        .with_help(format!(
            "expected `{}`",
            schema.signature(&directive.name().to_ascii_uppercase())
        )))
    }

    fn raw(&self, index: usize) -> &'a str {
        self.directive.argument(index).unwrap_or_default()
    }

    fn text(&self, index: usize) -> &'a str {
        unquote(self.raw(index))
    }

    fn number(&self, index: usize, field: &str) -> Result<i32> {
        let raw = self.raw(index);
        raw.parse().map_err(|_| {
            Diagnostic::error(format!(
                "`{}` {field} must be an integer, found `{raw}`",
                self.directive.name()
            ))
            .with_code(ErrorCode::E103)
            .with_label(self.directive.span(), "in this directive")
        })
    }

    /// Four consecutive arguments starting at `first`.
    fn rect(&self, first: usize) -> Result<SourceRect> {
        Ok(SourceRect::new(
            self.number(first, "x")?,
            self.number(first + 1, "y")?,
            self.number(first + 2, "width")?,
            self.number(first + 3, "height")?,
        ))
    }

    fn style(&self, index: usize) -> StyleFlags {
        self.directive
            .argument(index)
            .map(StyleFlags::parse)
            .unwrap_or_default()
    }
}

/// Converts a body directive into an [`Element`].
///
/// Directive names are matched case-insensitively. Kinds without a builder
/// become [`Element::Unsupported`] and are not an error.
///
/// # Errors
///
/// - `E102` when the argument count does not fit the directive's schema.
/// - `E103` when a coordinate is not an integer.
pub fn elaborate(directive: &Directive) -> Result<Element> {
    let keyword = directive.name().to_ascii_uppercase();
    match keyword.as_str() {
        "LTEXT" => label(directive, TextAlign::Start),
        "RTEXT" => label(directive, TextAlign::End),
        "CTEXT" => label(directive, TextAlign::Center),
        "COMBOBOX" => {
            let fields = Fields::check(directive, &ID_SCHEMA)?;
            Ok(Element::ComboBox(ComboBoxControl::new(
                fields.raw(0),
                fields.rect(1)?,
                fields.style(5),
            )))
        }
        "PUSHBUTTON" => button(directive, false),
        "DEFPUSHBUTTON" => button(directive, true),
        "EDITTEXT" => {
            let fields = Fields::check(directive, &ID_SCHEMA)?;
            Ok(Element::EditText(EditControl::new(
                fields.raw(0),
                fields.rect(1)?,
                fields.style(5),
            )))
        }
        "CONTROL" => {
            let fields = Fields::check(directive, &CONTROL_SCHEMA)?;
            Ok(Element::Control(GenericControl::new(
                fields.text(0),
                fields.raw(1),
                fields.text(2),
                fields.style(3),
                fields.rect(4)?,
            )))
        }
        _ => Ok(Element::Unsupported {
            name: directive.name().to_string(),
            arguments: directive.arguments().to_vec(),
        }),
    }
}

fn label(directive: &Directive, align: TextAlign) -> Result<Element> {
    let fields = Fields::check(directive, &TEXT_SCHEMA)?;
    Ok(Element::Label(LabelControl::new(
        fields.text(0),
        fields.raw(1),
        fields.rect(2)?,
        fields.style(6),
        align,
    )))
}

fn button(directive: &Directive, is_default: bool) -> Result<Element> {
    let fields = Fields::check(directive, &TEXT_SCHEMA)?;
    Ok(Element::PushButton(ButtonControl::new(
        fields.text(0),
        fields.raw(1),
        fields.rect(2)?,
        fields.style(6),
        is_default,
    )))
}
