//! Markup checks: interactive elements that do nothing, and basic
//! accessibility.

use super::{compile, Rule, Source};
use crate::models::Finding;
use crate::scan::{has_attr, has_attr_value, opening_tags};
use regex::Regex;

const DEAD_ID: &str = "dead-features";
const A11Y_ID: &str = "accessibility";

const BUTTON_BINDINGS: &[&str] = &["onClick", "asChild", "form"];
const INPUT_BINDINGS: &[&str] = &["onChange", "value", "defaultValue"];
const INPUT_TAGS: &[&str] = &["Input", "input"];

pub struct DeadFeatures;

impl DeadFeatures {
    fn button_is_wired(attrs: &str) -> bool {
        BUTTON_BINDINGS.iter().any(|a| has_attr(attrs, a))
            || has_attr_value(attrs, "type", "submit")
    }

    fn input_is_wired(attrs: &str) -> bool {
        INPUT_BINDINGS.iter().any(|a| has_attr(attrs, a))
    }

    /// (total tags, dead tags) for `tags` judged by `wired`.
    fn tally(text: &str, tags: &[&str], wired: fn(&str) -> bool) -> (usize, usize) {
        tags.iter()
            .flat_map(|t| opening_tags(text, t))
            .fold((0, 0), |(total, dead), attrs| {
                (total + 1, dead + usize::from(!wired(attrs)))
            })
    }
}

impl Rule for DeadFeatures {
    fn id(&self) -> &'static str {
        DEAD_ID
    }

    fn description(&self) -> &'static str {
        "Buttons and inputs are bound to handlers or values"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();

        let (buttons, dead) = Self::tally(source.text, &["Button"], Self::button_is_wired);
        if dead > 0 {
            out.push(Finding::warning(
                DEAD_ID,
                format!(
                    "{} button(s) have no onClick, asChild, type=\"submit\" or form binding",
                    dead
                ),
            ));
        } else if buttons > 0 {
            out.push(Finding::passed(
                DEAD_ID,
                format!("All {} button(s) are wired to an action", buttons),
            ));
        }

        let (inputs, dead) = Self::tally(source.text, INPUT_TAGS, Self::input_is_wired);
        if dead > 0 {
            out.push(Finding::warning(
                DEAD_ID,
                format!(
                    "{} input(s) have no onChange, value or defaultValue binding",
                    dead
                ),
            ));
        } else if inputs > 0 {
            out.push(Finding::passed(
                DEAD_ID,
                format!("All {} input(s) are bound", inputs),
            ));
        }
        out
    }
}

pub struct Accessibility {
    heading: Regex,
}

impl Accessibility {
    pub fn new() -> Self {
        Self {
            heading: compile("heading", r"<h[1-6][\s>/]"),
        }
    }
}

impl Default for Accessibility {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Accessibility {
    fn id(&self) -> &'static str {
        A11Y_ID
    }

    fn description(&self) -> &'static str {
        "Images carry alt text and the page uses headings"
    }

    fn evaluate(&self, source: &Source<'_>) -> Vec<Finding> {
        let mut out = Vec::new();
        if !opening_tags(source.text, "img").is_empty() && !source.contains("alt=") {
            out.push(Finding::warning(A11Y_ID, "<img> without alt text"));
        }
        if self.heading.is_match(source.text) {
            out.push(Finding::passed(A11Y_ID, "Heading elements structure the page"));
        }
        out
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
    fn test_wired_button_passes() {
        let out = DeadFeatures.evaluate(&standard("<Button onClick={...}>Go</Button>"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Passed);
    }

    #[test]
    fn test_dead_buttons_counted() {
        let text = r#"
<Button>Export</Button>
<Button variant="ghost">Share</Button>
<Button type="submit">Save</Button>
<Button asChild><Link to="/x">x</Link></Button>
"#;
        let out = DeadFeatures.evaluate(&standard(text));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Warning);
        assert!(out[0].message.starts_with("2 button(s)"));
    }

    #[test]
    fn test_arrow_handler_does_not_cut_tag() {
        let text = r#"<Button variant="x" onClick={() => setOpen(true)} disabled={a > b}>x</Button>"#;
        let out = DeadFeatures.evaluate(&standard(text));
        assert_eq!(out[0].severity, Severity::Passed);
    }

    #[test]
    fn test_binding_names_inside_class_values_do_not_count() {
        let text = r#"<Button className="w-full form text-sm">Go</Button><Input className="x value y" />"#;
        let out = DeadFeatures.evaluate(&standard(text));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|f| f.severity == Severity::Warning));
        assert!(out[0].message.starts_with("1 button(s)"));
        assert!(out[1].message.starts_with("1 input(s)"));
    }

    #[test]
    fn test_inputs_checked_for_both_cases() {
        let text = r#"<Input placeholder="Search" /><input value={v} onChange={set} />"#;
        let out = DeadFeatures.evaluate(&standard(text));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "1 input(s) have no onChange, value or defaultValue binding");
    }

    #[test]
    fn test_no_tags_no_findings() {
        assert!(DeadFeatures.evaluate(&standard("<ButtonGroup /><InputLabel />")).is_empty());
    }

    #[test]
    fn test_image_alt_is_file_wide() {
        let rule = Accessibility::new();
        let out = rule.evaluate(&standard(r#"<img src="a.png" />"#));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Warning);

        let out = rule.evaluate(&standard(r#"<img src="a.png" alt="A" /><h1>Title</h1>"#));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Passed);
    }
}
