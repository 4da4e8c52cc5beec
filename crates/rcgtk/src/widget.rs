//! GtkBuilder object fragments.
//!
//! A [`Widget`] collects the properties of one grid child and renders it as
//! a `<child>` element with a `<layout>` node. Text is written as given;
//! markup characters in labels are not escaped.

use std::fmt;

use rcgtk_core::geometry::GridCell;

/// Indentation of a grid child inside the generated document.
const CHILD_INDENT: usize = 8;
const STEP: usize = 2;

#[derive(Debug, Clone, PartialEq)]
struct Property {
    name: &'static str,
    value: String,
    translatable: bool,
}

/// One widget placed in the grid.
///
/// # Examples
///
/// ```
/// # use rcgtk::widget::Widget;
/// # use rcgtk_core::geometry::GridCell;
/// let fragment = Widget::new("GtkLabel", "ID_1001", GridCell::new(1, 2, 3, 1))
///     .property("label", "Device")
///     .flag("visible", true)
///     .render();
///
/// assert!(fragment.contains(r#"<object class="GtkLabel" id="ID_1001">"#));
/// assert!(fragment.contains(r#"<property name="visible">True</property>"#));
/// assert!(fragment.contains(r#"<property name="row">2</property>"#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    class: &'static str,
    id: String,
    properties: Vec<Property>,
    items: Vec<String>,
    cell: GridCell,
}

impl Widget {
    pub fn new(class: &'static str, id: impl Into<String>, cell: GridCell) -> Self {
        Self {
            class,
            id: id.into(),
            properties: Vec::new(),
            items: Vec::new(),
            cell,
        }
    }

    pub fn property(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.properties.push(Property {
            name,
            value: value.to_string(),
            translatable: false,
        });
        self
    }

    /// Adds a property marked `translatable="yes"`.
    pub fn translatable_property(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.properties.push(Property {
            name,
            value: value.to_string(),
            translatable: true,
        });
        self
    }

    /// Adds a boolean property, written as `True` or `False`.
    pub fn flag(self, name: &'static str, value: bool) -> Self {
        self.property(name, if value { "True" } else { "False" })
    }

    /// Adds an entry to the widget's `<items>` list. Entry ids count up
    /// from zero.
    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.items.push(text.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Renders the `<child>` fragment.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let child = " ".repeat(CHILD_INDENT);
        let object = " ".repeat(CHILD_INDENT + STEP);
        let inner = " ".repeat(CHILD_INDENT + 2 * STEP);
        let nested = " ".repeat(CHILD_INDENT + 3 * STEP);

        writeln!(f, "{child}<child>")?;
        writeln!(f, r#"{object}<object class="{}" id="{}">"#, self.class, self.id)?;

        for property in &self.properties {
            let translatable = if property.translatable {
                r#" translatable="yes""#
            } else {
                ""
            };
            writeln!(
                f,
                r#"{inner}<property name="{}"{translatable}>{}</property>"#,
                property.name, property.value
            )?;
        }

        if !self.items.is_empty() {
            writeln!(f, "{inner}<items>")?;
            for (index, item) in self.items.iter().enumerate() {
                writeln!(f, r#"{nested}<item id="{index}" translatable="yes">{item}</item>"#)?;
            }
            writeln!(f, "{inner}</items>")?;
        }

        writeln!(f, "{inner}<layout>")?;
        for (name, value) in [
            ("column", self.cell.column()),
            ("column-span", self.cell.column_span()),
            ("row", self.cell.row()),
            ("row-span", self.cell.row_span()),
        ] {
            writeln!(f, r#"{nested}<property name="{name}">{value}</property>"#)?;
        }
        writeln!(f, "{inner}</layout>")?;

        writeln!(f, "{object}</object>")?;
        writeln!(f, "{child}</child>")
    }
}

/// A visible placeholder for something that could not be translated.
pub fn placeholder(text: &str) -> String {
    format!("{}<!-- {text} -->\n", " ".repeat(CHILD_INDENT))
}
