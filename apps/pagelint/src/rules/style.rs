//! Styling conventions: theme classes, hardcoded colours, navigation
//! colours, responsive breakpoints.

use super::{compile, Rule, Source};
use crate::models::Finding;
use regex::Regex;

const THEME_ID: &str = "theme-integration";
const NAV_ID: &str = "navigation-colors";
const RESPONSIVE_ID: &str = "responsive-design";

pub const THEME_CLASSES: &[&str] = &[
    "bg-background",
    "text-foreground",
    "bg-card",
    "text-card-foreground",
    "bg-primary",
    "text-primary-foreground",
    "bg-muted",
    "text-muted-foreground",
    "border-border",
    "bg-accent",
];

/// Hardcoded colour patterns; each match is reported on its own.
const FORBIDDEN_COLORS: &[(&str, &str)] = &[
    ("hex color", r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b"),
    ("black class", r"\b(?:bg|text|border)-black\b"),
    ("white class", r"\b(?:bg|text|border)-white\b"),
    ("gray class", r"\b(?:bg|text|border)-gray-\d{2,3}\b"),
    ("rgb() color", r"rgb\("),
];

pub const NAV_CLASSES: &[&str] = &[
    "bg-sidebar",
    "text-sidebar-foreground",
    "bg-sidebar-accent",
    "text-sidebar-accent-foreground",
    "border-sidebar-border",
];

const BREAKPOINTS: &[&str] = &["sm:", "md:", "lg:", "xl:"];

pub struct ThemeIntegration {
    forbidden: Vec<(&'static str, Regex)>,
}

impl ThemeIntegration {
    pub fn new() -> Self {
        let forbidden = FORBIDDEN_COLORS
            .iter()
            .map(|(name, pat)| (*name, compile(name, pat)))
            .collect();
        Self { forbidden }
    }
}

impl Default for ThemeIntegration {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ThemeIntegration {
    fn id(&self) -> &'static str {
        THEME_ID
    }

    fn description(&self) -> &'static str {
        "useTheme() is called, theme classes are used, no hardcoded colours"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        if !source.contains("useTheme()") {
            out.push(Finding::error(THEME_ID, "useTheme() hook is not called"));
        }

        let found = source.present(THEME_CLASSES);
        out.push(if found.is_empty() {
            Finding::warning(THEME_ID, "No theme-aware classes found (e.g. bg-background, text-foreground)")
        } else {
            Finding::passed(THEME_ID, format!("Theme classes used: {}", found.join(", ")))
        });

        for (name, re) in &self.forbidden {
            if let Some(m) = re.find(source.text) {
                out.push(Finding::error(
                    THEME_ID,
                    format!("Hardcoded {} found: {}", name, m.as_str()),
                ));
            }
        }
        out
    }
}

pub struct NavigationColors;

impl Rule for NavigationColors {
    fn id(&self) -> &'static str {
        NAV_ID
    }

    fn description(&self) -> &'static str {
        "Navigation uses sidebar colour tokens and a theme-aware logo"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        let found = source.present(NAV_CLASSES);
        if !found.is_empty() {
            out.push(Finding::passed(
                NAV_ID,
                format!("Navigation colour classes used: {}", found.join(", ")),
            ));
        }
        if source.contains("<Logo") {
            out.push(if source.contains("color=") {
                Finding::warning(
                    NAV_ID,
                    "<Logo> uses a fixed color prop; pass variant=\"theme\" instead",
                )
            } else {
                Finding::passed(NAV_ID, "<Logo> follows the active theme")
            });
        }
        out
    }
}

pub struct ResponsiveDesign;

impl Rule for ResponsiveDesign {
    fn id(&self) -> &'static str {
        RESPONSIVE_ID
    }

    fn description(&self) -> &'static str {
        "Breakpoint prefixes and grid/flex layouts are used"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        let found = source.present(BREAKPOINTS);
        out.push(if found.is_empty() {
            Finding::warning(RESPONSIVE_ID, "No responsive breakpoints (sm:, md:, lg:, xl:) used")
        } else {
            Finding::passed(
                RESPONSIVE_ID,
                format!("Responsive breakpoints used: {}", found.join(", ")),
            )
        });
        if source.contains_any(&["grid", "flex"]) {
            out.push(Finding::passed(RESPONSIVE_ID, "Grid or flex layout is used"));
        }
        out
    }
}
