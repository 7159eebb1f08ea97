//! Code hygiene: forbidden constructs plus loading, error, and debug
//! integration.

use super::{compile, Rule, Source};
use crate::models::Finding;
use regex::Regex;

const FORBIDDEN_ID: &str = "forbidden-patterns";
const LOADING_ID: &str = "loading-states";
const ERRORS_ID: &str = "error-handling";
const DEBUG_ID: &str = "debug-integration";

const MENU_ARRAY: &str =
    r"\bconst\s+\w*(?:[Mm]enu|[Ss]ections|[Nn]avItems)\w*\s*(?::[^=\n]+)?=\s*\[";
const RAW_ANCHOR: &str = r"<a[\s>]";
const DEBUG_PRINTS: &[&str] = &["console.log(", "console.debug("];

pub struct ForbiddenPatterns {
    menu_array: Regex,
    anchor: Regex,
}

impl ForbiddenPatterns {
    pub fn new() -> Self {
        Self {
            menu_array: compile("menu array", MENU_ARRAY),
            anchor: compile("anchor", RAW_ANCHOR),
        }
    }
}

impl Default for ForbiddenPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ForbiddenPatterns {
    fn id(&self) -> &'static str {
        FORBIDDEN_ID
    }

    fn description(&self) -> &'static str {
        "No hardcoded menus, unmarked raw anchors, or console output"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        if self.menu_array.is_match(source.text) {
            out.push(Finding::error(
                FORBIDDEN_ID,
                "Hardcoded menu array found; load sections through useMenu()",
            ));
        }
        // File-wide: any isExternal marker silences every raw anchor.
        if self.anchor.is_match(source.text) && !source.contains("isExternal") {
            out.push(Finding::warning(
                FORBIDDEN_ID,
                "Raw <a> tag found; use <Link> for internal routes or mark external links with isExternal",
            ));
        }
        if source.contains_any(DEBUG_PRINTS) {
            out.push(Finding::warning(
                FORBIDDEN_ID,
                "console.log/console.debug call found; use the debug logger",
            ));
        }
        out
    }
}

pub struct LoadingStates;

impl Rule for LoadingStates {
    fn id(&self) -> &'static str {
        LOADING_ID
    }

    fn description(&self) -> &'static str {
        "Loading states render skeletons"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        if source.contains_any(&["Skeleton", "isLoading"]) {
            out.push(Finding::passed(LOADING_ID, "Loading state is handled"));
        }
        if source.contains_all(&["<Skeleton", "className="]) {
            out.push(Finding::passed(LOADING_ID, "Skeleton placeholders are styled"));
        }
        out
    }
}

pub struct ErrorHandling;

impl Rule for ErrorHandling {
    fn id(&self) -> &'static str {
        ERRORS_ID
    }

    fn description(&self) -> &'static str {
        "Failures are caught and rendered with destructive styling"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        if source.contains_all(&["try {", "catch"]) {
            out.push(Finding::passed(ERRORS_ID, "try/catch error handling present"));
        }
        if source.contains_all(&["error", "text-destructive"]) {
            out.push(Finding::passed(
                ERRORS_ID,
                "Errors are rendered with text-destructive styling",
            ));
        }
        out
    }
}

pub struct DebugIntegration;

impl Rule for DebugIntegration {
    fn id(&self) -> &'static str {
        DEBUG_ID
    }

    fn description(&self) -> &'static str {
        "Debug hooks, an error boundary, and debug logging are wired in"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        vec![
            Finding::recommend(
                DEBUG_ID,
                source.contains_any(&["useDebugPanel", "useDebugLogger"]),
                "Debug hook is used",
                "No debug hook (useDebugPanel or useDebugLogger) used",
            ),
            Finding::recommend(
                DEBUG_ID,
                source.contains("<ErrorBoundary"),
                "Page is wrapped in <ErrorBoundary>",
                "Page is not wrapped in <ErrorBoundary>",
            ),
            Finding::recommend(
                DEBUG_ID,
                source.contains_any(&["logDebug(", "debugInfo("]),
                "Debug logging calls present",
                "No debug logging calls (logDebug or debugInfo)",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageKind, Severity};

    fn standard(text: &str) -> Source<'_> {
        Source::new(text, PageKind::Standard)
    }

    #[test]
    fn test_menu_array_literal_is_error() {
        let rule = ForbiddenPatterns::new();
        for text in [
            "const menuItems = [",
            "const sidebarSections: Section[] = [{ name: 'x' }]",
            "export const NavItems = []",
        ] {
            let out = rule.evaluate(&standard(text));
            assert_eq!(out.len(), 1, "{}", text);
            assert_eq!(out[0].severity, Severity::Error);
        }
        assert!(rule.evaluate(&standard("const items = getSections()")).is_empty());
    }

    #[test]
    fn test_anchor_is_file_wide_is_external() {
        let rule = ForbiddenPatterns::new();
        let out = rule.evaluate(&standard(r#"<a href="/x">x</a>"#));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Warning);

        let text = r#"<a href="/x">x</a><ExternalLink isExternal href="https://x" />"#;
        assert!(rule.evaluate(&standard(text)).is_empty());

        assert!(rule.evaluate(&standard("<abbr>x</abbr>")).is_empty());
    }

    #[test]
    fn test_console_output_single_warning() {
        let out = ForbiddenPatterns::new().evaluate(&standard("console.log(a); console.debug(b);"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Warning);
    }

    #[test]
    fn test_additive_rules_silent_when_absent() {
        assert!(LoadingStates.evaluate(&standard("")).is_empty());
        assert!(ErrorHandling.evaluate(&standard("")).is_empty());
    }

    #[test]
    fn test_additive_rules_pass() {
        let text = r#"try { load() } catch (error) { setError(error) } <p className="text-destructive">{error}</p> <Skeleton className="h-4" />"#;
        assert_eq!(LoadingStates.evaluate(&standard(text)).len(), 2);
        assert_eq!(ErrorHandling.evaluate(&standard(text)).len(), 2);
    }

    #[test]
    fn test_debug_integration_warnings() {
        let out = DebugIntegration.evaluate(&standard(""));
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|f| f.severity == Severity::Warning));

        let out = DebugIntegration.evaluate(&standard("useDebugLogger(); <ErrorBoundary> logDebug('x')"));
        assert!(out.iter().all(|f| f.severity == Severity::Passed));
    }
}
