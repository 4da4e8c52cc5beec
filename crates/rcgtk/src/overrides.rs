//! Targeted corrections applied around element translation.
//!
//! Some controls translate correctly in general but look wrong in the
//! generated grid. Instead of special-casing them in the translator, each
//! correction is an [`OverrideRule`]: a predicate plus an optional rewrite of
//! the directive before translation and of the fragment after it.
//!
//! Rules are applied in list order and every matching rule applies.

use std::fmt;

use log::trace;

use rcgtk_core::grid::GridRatios;
use rcgtk_parser::Directive;

/// One correction hook.
pub trait OverrideRule: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if the rule applies to `directive`.
    fn matches(&self, directive: &Directive) -> bool;

    /// Rewrites the directive before it is translated.
    fn rewrite_input(&self, directive: Directive) -> Directive {
        directive
    }

    /// Rewrites the fragment produced for `directive`.
    fn rewrite_output(&self, fragment: String, _directive: &Directive) -> String {
        fragment
    }
}

/// Forces combo boxes to a single grid row.
///
/// A combo box height in the source covers its drop-down list, which would
/// otherwise stretch the row span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboBoxHeight {
    height: u32,
}

impl ComboBoxHeight {
    const HEIGHT_ARGUMENT: usize = 4;

    /// Creates the rule for a grid whose rows are `ratios.row_ratio` units
    /// tall.
    pub fn new(ratios: GridRatios) -> Self {
        Self {
            height: ratios.row_ratio.ceil() as u32,
        }
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl OverrideRule for ComboBoxHeight {
    fn name(&self) -> &'static str {
        "combo-box-height"
    }

    fn matches(&self, directive: &Directive) -> bool {
        directive.is("COMBOBOX")
    }

    fn rewrite_input(&self, mut directive: Directive) -> Directive {
        directive.set_argument(Self::HEIGHT_ARGUMENT, self.height.to_string());
        directive
    }
}

/// An ordered list of [`OverrideRule`]s.
#[derive(Debug, Default)]
pub struct OverrideRules {
    rules: Vec<Box<dyn OverrideRule>>,
}

impl OverrideRules {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules every conversion uses unless configured otherwise.
    pub fn standard(ratios: GridRatios) -> Self {
        Self::new().with_rule(ComboBoxHeight::new(ratios))
    }

    /// Appends a rule; it runs after the rules already in the list.
    pub fn with_rule(mut self, rule: impl OverrideRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the input rewrites. Each rule is tested against the directive as
    /// rewritten by the rules before it.
    pub fn apply_input(&self, mut directive: Directive) -> Directive {
        for rule in &self.rules {
            if rule.matches(&directive) {
                trace!(rule = rule.name(), directive = directive.name(); "Rewriting directive");
                directive = rule.rewrite_input(directive);
            }
        }
        directive
    }

    /// Runs the output rewrites against the fragment built for `directive`.
    pub fn apply_output(&self, mut fragment: String, directive: &Directive) -> String {
        for rule in &self.rules {
            if rule.matches(directive) {
                trace!(rule = rule.name(), directive = directive.name(); "Rewriting fragment");
                fragment = rule.rewrite_output(fragment, directive);
            }
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use rcgtk_parser::tokenize;

    use super::*;

    #[derive(Debug)]
    struct Rename(&'static str, &'static str);

    impl OverrideRule for Rename {
        fn name(&self) -> &'static str {
            "rename"
        }

        fn matches(&self, directive: &Directive) -> bool {
            directive.is(self.0)
        }

        fn rewrite_input(&self, directive: Directive) -> Directive {
            let span = directive.span();
            let (_, arguments) = directive.into_parts();
            Directive::new(self.1, arguments, span)
        }
    }

    #[derive(Debug)]
    struct Suffix(&'static str);

    impl OverrideRule for Suffix {
        fn name(&self) -> &'static str {
            "suffix"
        }

        fn matches(&self, _directive: &Directive) -> bool {
            true
        }

        fn rewrite_output(&self, fragment: String, _directive: &Directive) -> String {
            fragment + self.0
        }
    }

    fn directive(line: &str) -> Directive {
        tokenize(line).remove(0)
    }

    #[test]
    fn test_combo_box_height() {
        let rules = OverrideRules::standard(GridRatios::default());

        let rewritten = rules.apply_input(directive("COMBOBOX IDC_DEVICE,8,30,196,120,CBS_DROPDOWNLIST"));

        assert_eq!(rewritten.argument(4), Some("4"));
        assert_eq!(rewritten.argument(5), Some("CBS_DROPDOWNLIST"));
    }

    #[test]
    fn test_combo_box_height_ignores_other_directives() {
        let rules = OverrideRules::standard(GridRatios::default());

        let rewritten = rules.apply_input(directive("EDITTEXT IDC_A,8,30,196,120"));

        assert_eq!(rewritten.argument(3), Some("196"));
        assert_eq!(rewritten.argument(4), Some("120"));
    }

    #[test]
    fn test_short_combo_box_is_left_alone() {
        let rules = OverrideRules::standard(GridRatios::default());

        let rewritten = rules.apply_input(directive("COMBOBOX IDC_DEVICE,8,30"));

        assert_eq!(rewritten.arguments().len(), 3);
    }

    #[test]
    fn test_rules_apply_in_order() {
        let rules = OverrideRules::new()
            .with_rule(Rename("RTEXT", "CTEXT"))
            .with_rule(Rename("CTEXT", "LTEXT"));

        let rewritten = rules.apply_input(directive("RTEXT \"A\",IDC_A,1,2,3,4"));
        assert_eq!(rewritten.name(), "LTEXT");

        let reversed = OverrideRules::new()
            .with_rule(Rename("CTEXT", "LTEXT"))
            .with_rule(Rename("RTEXT", "CTEXT"));
        let rewritten = reversed.apply_input(directive("RTEXT \"A\",IDC_A,1,2,3,4"));
        assert_eq!(rewritten.name(), "CTEXT");
    }

    #[test]
    fn test_every_matching_output_rule_applies() {
        let rules = OverrideRules::new().with_rule(Suffix("a")).with_rule(Suffix("b"));

        let fragment = rules.apply_output("x".to_string(), &directive("END"));

        assert_eq!(fragment, "xab");
    }
}
