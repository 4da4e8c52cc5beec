//! Element translation: one body directive to one widget fragment.
//!
//! Translation runs in four steps:
//!
//! 1. input override rules rewrite the directive,
//! 2. the directive is converted to a typed [`Element`],
//! 3. the element is built into a [`Widget`] or a placeholder comment,
//! 4. output override rules rewrite the fragment.
//!
//! Unresolved identifiers and unsupported controls are warnings; schema
//! violations are errors. Both are recorded in the caller's
//! [`DiagnosticCollector`] so one pass reports every problem.

use log::{debug, trace};

use rcgtk_core::{
    geometry::SourceRect,
    grid::GridMapper,
    semantic::{ButtonControl, Element, GenericControl},
    style::StyleFlags,
};
use rcgtk_parser::{
    Directive,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    elaborate,
};

use crate::{
    overrides::OverrideRules,
    resolver::SymbolResolver,
    widget::{Widget, placeholder},
};

/// Translates dialog body directives with a fixed context.
#[derive(Debug)]
pub struct Translator<'a> {
    resolver: &'a SymbolResolver,
    mapper: GridMapper,
    rules: &'a OverrideRules,
}

impl<'a> Translator<'a> {
    pub fn new(resolver: &'a SymbolResolver, mapper: GridMapper, rules: &'a OverrideRules) -> Self {
        Self {
            resolver,
            mapper,
            rules,
        }
    }

    /// Translates one directive.
    ///
    /// Returns an empty fragment when the directive violates its schema; the
    /// error is recorded in `diagnostics`.
    pub fn translate(&self, directive: &Directive, diagnostics: &mut DiagnosticCollector) -> String {
        let directive = self.rules.apply_input(directive.clone());

        let element = match elaborate(&directive) {
            Ok(element) => element,
            Err(diagnostic) => {
                debug!(directive = directive.name(); "Directive does not match its schema");
                diagnostics.emit(diagnostic);
                return String::new();
            }
        };
        trace!(element:?; "Elaborated directive");

        let fragment = self.build(&element, &directive, diagnostics);
        self.rules.apply_output(fragment, &directive)
    }

    fn build(
        &self,
        element: &Element,
        directive: &Directive,
        diagnostics: &mut DiagnosticCollector,
    ) -> String {
        let visible = element.is_visible();
        let mut widget = |class, id: &str, rect: SourceRect| {
            Widget::new(
                class,
                self.resolver.resolve(id, directive.span(), diagnostics),
                self.mapper.map(rect),
            )
        };

        match element {
            Element::Label(label) => widget("GtkLabel", label.id(), label.rect())
                .property("label", label.text())
                .property("halign", label.align().as_halign())
                .flag("visible", visible)
                .render(),
            Element::ComboBox(combo) => {
                let widget = widget("GtkComboBoxText", combo.id(), combo.rect());
                let placeholder_item = widget.id().to_string();
                widget
                    .flag("visible", visible)
                    .flag("can-focus", false)
                    .item(placeholder_item)
                    .render()
            }
            Element::PushButton(button) => {
                push_button(widget("GtkButton", button.id(), button.rect()), button, visible)
            }
            Element::EditText(edit) => widget("GtkTextView", edit.id(), edit.rect())
                .flag("visible", visible)
                .flag("can-focus", true)
                .flag("editable", edit.is_editable())
                .render(),
            Element::Control(control) => match ControlKind::of(control) {
                ControlKind::Button => widget("GtkButton", control.id(), control.rect())
                    .translatable_property("label", control.text())
                    .flag("visible", visible)
                    .flag("can-focus", true)
                    .flag("receives-default", true)
                    .render(),
                ControlKind::CheckBox => widget("GtkCheckButton", control.id(), control.rect())
                    .translatable_property("label", control.text())
                    .flag("visible", visible)
                    .flag("can-focus", true)
                    .flag("receives-default", true)
                    .render(),
                ControlKind::Unsupported => {
                    diagnostics.emit(
                        Diagnostic::warning(format!(
                            "`CONTROL` of class `{}` with style `{}` has no widget",
                            control.class(),
                            control.style()
                        ))
                        .with_code(ErrorCode::W002)
                        .with_label(directive.span(), "replaced by a placeholder comment"),
                    );
                    placeholder(&format!(
                        "UNSUPPORTED CONTROL STYLE OF '{}'",
                        control.class()
                    ))
                }
            },
            Element::Unsupported { name, .. } => {
                diagnostics.emit(
                    Diagnostic::warning(format!("`{name}` elements are not supported"))
                        .with_code(ErrorCode::W003)
                        .with_label(directive.span(), "replaced by a placeholder comment"),
                );
                placeholder(&format!("UNSUPPORTED ELEMENT <{name}>"))
            }
        }
    }
}

/// The widget chosen for a generic `CONTROL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlKind {
    Button,
    CheckBox,
    Unsupported,
}

impl ControlKind {
    fn of(control: &GenericControl) -> Self {
        if !control.has_class(GenericControl::BUTTON_CLASS) {
            return Self::Unsupported;
        }

        let style = control.style();
        let plain = style.is_empty() || (style.len() == 1 && style.contains(StyleFlags::TAB_STOP));
        if plain {
            Self::Button
        } else if style.contains(StyleFlags::AUTO_CHECKBOX) {
            Self::CheckBox
        } else {
            Self::Unsupported
        }
    }
}

/// `DEFPUSHBUTTON` renders like `PUSHBUTTON`; GTK 4 buttons carry no
/// per-widget default flag.
fn push_button(widget: Widget, button: &ButtonControl, visible: bool) -> String {
    widget
        .translatable_property("label", button.text())
        .flag("visible", visible)
        .flag("can-focus", true)
        .flag("receives-default", true)
        .render()
}
