//! Semantic model of dialog elements.
//!
//! Every body directive of a dialog block is converted into exactly one
//! [`Element`]. Supported directive kinds carry a record with named fields;
//! anything else is kept verbatim as [`Element::Unsupported`] so it can be
//! reported without aborting the conversion.

use crate::{geometry::SourceRect, style::StyleFlags};

/// Horizontal text alignment of a static label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// `LTEXT`
    #[default]
    Start,
    /// `RTEXT`
    End,
    /// `CTEXT`
    Center,
}

impl TextAlign {
    /// The GTK `halign` value for this alignment.
    pub fn as_halign(&self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::End => "end",
            TextAlign::Center => "center",
        }
    }
}

/// A static text control (`LTEXT`, `RTEXT`, `CTEXT`).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelControl {
    text: String,
    id: String,
    rect: SourceRect,
    style: StyleFlags,
    align: TextAlign,
}

impl LabelControl {
    pub fn new(
        text: impl Into<String>,
        id: impl Into<String>,
        rect: SourceRect,
        style: StyleFlags,
        align: TextAlign,
    ) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
            rect,
            style,
            align,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> SourceRect {
        self.rect
    }

    pub fn style(&self) -> &StyleFlags {
        &self.style
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }
}

/// A drop-down list (`COMBOBOX`).
#[derive(Debug, Clone, PartialEq)]
pub struct ComboBoxControl {
    id: String,
    rect: SourceRect,
    style: StyleFlags,
}

impl ComboBoxControl {
    pub fn new(id: impl Into<String>, rect: SourceRect, style: StyleFlags) -> Self {
        Self {
            id: id.into(),
            rect,
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> SourceRect {
        self.rect
    }

    pub fn style(&self) -> &StyleFlags {
        &self.style
    }
}

/// A push button (`PUSHBUTTON`, `DEFPUSHBUTTON`).
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonControl {
    text: String,
    id: String,
    rect: SourceRect,
    style: StyleFlags,
    is_default: bool,
}

impl ButtonControl {
    pub fn new(
        text: impl Into<String>,
        id: impl Into<String>,
        rect: SourceRect,
        style: StyleFlags,
        is_default: bool,
    ) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
            rect,
            style,
            is_default,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> SourceRect {
        self.rect
    }

    pub fn style(&self) -> &StyleFlags {
        &self.style
    }

    /// Returns `true` for `DEFPUSHBUTTON`.
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A text entry field (`EDITTEXT`).
#[derive(Debug, Clone, PartialEq)]
pub struct EditControl {
    id: String,
    rect: SourceRect,
    style: StyleFlags,
}

impl EditControl {
    pub fn new(id: impl Into<String>, rect: SourceRect, style: StyleFlags) -> Self {
        Self {
            id: id.into(),
            rect,
            style,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rect(&self) -> SourceRect {
        self.rect
    }

    pub fn style(&self) -> &StyleFlags {
        &self.style
    }

    /// Returns `false` when the style marks the field read-only.
    pub fn is_editable(&self) -> bool {
        !self.style.contains(StyleFlags::READ_ONLY)
    }
}

/// A generic `CONTROL` directive whose behavior depends on its window class
/// and style flags.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericControl {
    text: String,
    id: String,
    class: String,
    style: StyleFlags,
    rect: SourceRect,
}

impl GenericControl {
    /// Window class of button-like controls.
    pub const BUTTON_CLASS: &'static str = "button";

    /// Creates a generic control. `class` is the unquoted window class name.
    pub fn new(
        text: impl Into<String>,
        id: impl Into<String>,
        class: impl Into<String>,
        style: StyleFlags,
        rect: SourceRect,
    ) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
            class: class.into(),
            style,
            rect,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn style(&self) -> &StyleFlags {
        &self.style
    }

    pub fn rect(&self) -> SourceRect {
        self.rect
    }

    /// Case-insensitive comparison of the window class.
    pub fn has_class(&self, class: &str) -> bool {
        self.class.eq_ignore_ascii_case(class)
    }
}

/// One element of a dialog body.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Label(LabelControl),
    ComboBox(ComboBoxControl),
    PushButton(ButtonControl),
    EditText(EditControl),
    Control(GenericControl),
    /// A directive kind the translator has no builder for.
    Unsupported {
        name: String,
        arguments: Vec<String>,
    },
}

impl Element {
    /// Returns whether the element is shown when the dialog opens.
    ///
    /// Elements without a style argument are visible.
    pub fn is_visible(&self) -> bool {
        match self {
            Element::Label(label) => label.style().is_visible(),
            Element::ComboBox(combo) => combo.style().is_visible(),
            Element::PushButton(button) => button.style().is_visible(),
            Element::EditText(edit) => edit.style().is_visible(),
            Element::Control(control) => control.style().is_visible(),
            Element::Unsupported { .. } => true,
        }
    }
}
