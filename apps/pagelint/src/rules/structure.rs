//! Structural conventions: imports, menu wiring, and page layout.

use super::{compile, Rule, Source};
use crate::models::Finding;
use regex::Regex;

const IMPORTS_ID: &str = "required-imports";
const MENU_ID: &str = "menu-integration";
const LAYOUT_ID: &str = "layout-structure";

/// (display name, pattern) for every import a page must declare.
const REQUIRED_IMPORTS: &[(&str, &str)] = &[
    ("React", r#"import\s+[^;]*\bfrom\s+['"]react['"]"#),
    ("Layout", r#"import\s+[^;]*\bLayout\b[^;]*\bfrom\s+['"][^'"]+['"]"#),
    ("useTheme", r"import\s+\{[^}]*\buseTheme\b[^}]*\}\s*from"),
    ("useMenu", r"import\s+\{[^}]*\buseMenu\b[^}]*\}\s*from"),
];

const SECTION_ACCESSORS: &[&str] = &["getSections", "section.name", "section.items"];

const SIDEBAR_PROPS: &[&str] = &["sidebarSections=", "activeSection=", "onSectionChange="];

pub struct RequiredImports {
    imports: Vec<(&'static str, Regex)>,
}

impl RequiredImports {
    pub fn new() -> Self {
        let imports = REQUIRED_IMPORTS
            .iter()
            .map(|(name, pat)| (*name, compile(name, pat)))
            .collect();
        Self { imports }
    }
}

impl Default for RequiredImports {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RequiredImports {
    fn id(&self) -> &'static str {
        IMPORTS_ID
    }

    fn description(&self) -> &'static str {
        "React, Layout, useTheme and useMenu must be imported"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        self.imports
            .iter()
            .map(|(name, re)| {
                if re.is_match(source.text) {
                    Finding::passed(IMPORTS_ID, format!("Import present: {}", name))
                } else {
                    Finding::error(IMPORTS_ID, format!("Missing required import: {}", name))
                }
            })
            .collect()
    }
}

pub struct MenuIntegration;

impl Rule for MenuIntegration {
    fn id(&self) -> &'static str {
        MENU_ID
    }

    fn description(&self) -> &'static str {
        "Standard pages load sidebar sections through useMenu()"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        if source.page.is_admin() {
            return vec![Finding::passed(
                MENU_ID,
                "Menu integration is optional for admin pages",
            )];
        }
        vec![
            Finding::require(
                MENU_ID,
                source.contains("useMenu()"),
                "useMenu() hook is called",
                "useMenu() hook is not called",
            ),
            Finding::require(
                MENU_ID,
                source.contains_all(SECTION_ACCESSORS),
                "Menu sections rendered via getSections()",
                "Menu sections must be rendered via getSections() with section.name and section.items",
            ),
            Finding::require(
                MENU_ID,
                source.contains("<SidebarMenu"),
                "<SidebarMenu> component is rendered",
                "<SidebarMenu> component is missing",
            ),
        ]
    }
}

pub struct LayoutStructure;

impl LayoutStructure {
    fn full_height(source: &Source<'_>) -> Finding {
        Finding::recommend(
            LAYOUT_ID,
            source.contains_all(&["min-h-screen", "bg-background"]),
            "Page container uses min-h-screen with bg-background",
            "Page container should use min-h-screen with bg-background",
        )
    }
}

impl Rule for LayoutStructure {
    fn id(&self) -> &'static str {
        LAYOUT_ID
    }

    fn description(&self) -> &'static str {
        "Pages render inside <Layout> with sidebar props, admin pages use theme styling"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        if source.page.is_admin() {
            out.push(Self::full_height(source));
            out.push(Finding::require(
                LAYOUT_ID,
                source.contains("useTheme("),
                "Admin page uses the theme hook",
                "Admin page must use the theme hook",
            ));
            return out;
        }
        out.push(Finding::require(
            LAYOUT_ID,
            source.contains("<Layout"),
            "Page is wrapped in <Layout>",
            "Page must be wrapped in <Layout>",
        ));
        for prop in SIDEBAR_PROPS {
            let name = prop.trim_end_matches('=');
            out.push(if source.contains(prop) {
                Finding::passed(LAYOUT_ID, format!("<Layout> receives {}", name))
            } else {
                Finding::error(LAYOUT_ID, format!("<Layout> is missing the {} prop", name))
            });
        }
        out.push(Self::full_height(source));
        out
    }
}
