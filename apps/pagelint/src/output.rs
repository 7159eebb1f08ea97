//! Output rendering for check reports and the rule list.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries
//! every report plus a top-level summary.

use crate::models::{Finding, Report, Summary};
use crate::rules::Rule;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

/// Print check reports in the requested format.
pub fn print_reports(reports: &[Report], output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_reports_json(reports))),
        _ => {
            let color = use_colors(output);
            for r in reports {
                print!("{}", render_report(r, color));
            }
            if reports.len() > 1 {
                let s = Summary::from_reports(reports);
                let line = format!(
                    "— Summary — files={} errors={} warnings={} passed={} failing={}",
                    s.files, s.errors, s.warnings, s.passed, s.failed_files
                );
                if color {
                    println!("{}", line.bold());
                } else {
                    println!("{}", line);
                }
            }
        }
    }
}

/// Print the rule catalogue in evaluation order.
pub fn print_rules(rules: &[Box<dyn Rule>], output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_rules_json(rules))),
        _ => {
            let color = use_colors(output);
            for (i, r) in rules.iter().enumerate() {
                let id = if color {
                    r.id().bold().to_string()
                } else {
                    r.id().to_string()
                };
                println!("{:>2}. {} — {}", i + 1, id, r.description());
            }
        }
    }
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

fn section(
    out: &mut String,
    findings: &[Finding],
    title: &str,
    color: bool,
    paint: fn(&str) -> String,
) {
    if findings.is_empty() {
        return;
    }
    let heading = format!("{} ({})", title, findings.len());
    let heading = if color { paint(&heading) } else { heading };
    let _ = writeln!(out, "  {}", heading);
    for f in findings {
        let _ = writeln!(out, "    • {}", f.message);
    }
}

/// Human-readable block for one report (pure, for testing).
pub fn render_report(r: &Report, color: bool) -> String {
    let mut out = String::new();
    let file = if color {
        r.file().bold().to_string()
    } else {
        r.file().to_string()
    };
    let _ = writeln!(out, "▌ {}", file);
    let _ = writeln!(out, "  Page type: {}", r.page());
    let score = format!("{}%", r.score());
    let score = if !color {
        score
    } else if r.has_errors() {
        score.red().to_string()
    } else if r.warnings().is_empty() {
        score.green().to_string()
    } else {
        score.yellow().to_string()
    };
    let _ = writeln!(out, "  Score: {}", score);
    section(&mut out, r.errors(), "✖ ERRORS", color, |s| s.red().bold().to_string());
    section(&mut out, r.warnings(), "▲ WARNINGS", color, |s| {
        s.yellow().bold().to_string()
    });
    section(&mut out, r.passed(), "✔ PASSED", color, |s| s.green().bold().to_string());
    out.push('\n');
    out
}

/// Compose the JSON document for a batch of reports (pure).
pub fn compose_reports_json(reports: &[Report]) -> JsonVal {
    json!({
        "reports": reports,
        "summary": Summary::from_reports(reports),
    })
}

/// Compose the JSON rule catalogue (pure).
pub fn compose_rules_json(rules: &[Box<dyn Rule>]) -> JsonVal {
    let items: Vec<_> = rules
        .iter()
        .map(|r| json!({"id": r.id(), "description": r.description()}))
        .collect();
    json!({ "rules": items })
}
