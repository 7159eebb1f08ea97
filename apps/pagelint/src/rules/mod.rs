//! House-style rules evaluated against a page source.
//!
//! Each rule is an independent predicate object. `default_rules` returns
//! them in evaluation order; that order only affects the sequence of
//! findings in a report, never their content.

mod hygiene;
mod markup;
mod structure;
mod style;

pub use hygiene::{DebugIntegration, ErrorHandling, ForbiddenPatterns, LoadingStates};
pub use markup::{Accessibility, DeadFeatures};
pub use structure::{LayoutStructure, MenuIntegration, RequiredImports};
pub use style::{NavigationColors, ResponsiveDesign, ThemeIntegration};

use crate::models::{Finding, PageKind};
use regex::Regex;

/// Text under evaluation plus its page classification.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub text: &'a str,
    pub page: PageKind,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str, page: PageKind) -> Self {
        Self { text, page }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.text.contains(n))
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text.contains(n))
    }

    /// Entries of `list` present in the text, in list order.
    pub fn present<'l>(&self, list: &[&'l str]) -> Vec<&'l str> {
        list.iter()
            .copied()
            .filter(|n| self.text.contains(n))
            .collect()
    }
}

/// A single house-style check.
pub trait Rule: Send + Sync {
    /// Stable identifier used in reports and configuration.
    fn id(&self) -> &'static str;

    /// One-line description for `pagelint rules`.
    fn description(&self) -> &'static str;

    /// Evaluate the rule. Must be pure: same source, same findings.
    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding>;
}

/// Create all built-in rules in evaluation order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RequiredImports::new()),
        Box::new(ThemeIntegration::new()),
        Box::new(MenuIntegration),
        Box::new(LayoutStructure),
        Box::new(ForbiddenPatterns::new()),
        Box::new(NavigationColors),
        Box::new(LoadingStates),
        Box::new(ErrorHandling),
        Box::new(DebugIntegration),
        Box::new(DeadFeatures),
        Box::new(Accessibility::new()),
        Box::new(ResponsiveDesign),
    ]
}

/// Ids of all built-in rules in evaluation order.
pub fn rule_ids() -> Vec<&'static str> {
    default_rules().iter().map(|r| r.id()).collect()
}

/// Compile a built-in pattern. Patterns are constants, so failure is a bug.
pub(crate) fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("built-in pattern '{}' is invalid: {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_order() {
        assert_eq!(
            rule_ids(),
            vec![
                "required-imports",
                "theme-integration",
                "menu-integration",
                "layout-structure",
                "forbidden-patterns",
                "navigation-colors",
                "loading-states",
                "error-handling",
                "debug-integration",
                "dead-features",
                "accessibility",
                "responsive-design",
            ]
        );
    }

    #[test]
    fn test_findings_carry_rule_id() {
        let src = Source::new("", PageKind::Standard);
        for rule in default_rules() {
            for f in rule.evaluate(&src) {
                assert_eq!(f.rule, rule.id());
            }
        }
    }

    #[test]
    fn test_present_keeps_list_order() {
        let src = Source::new("text-foreground bg-background", PageKind::Standard);
        assert_eq!(
            src.present(&["bg-background", "text-foreground", "bg-card"]),
            vec!["bg-background", "text-foreground"]
        );
    }
}
