//! Rule evaluator and batch runner.
//!
//! A `Checker` owns the enabled rules and classification markers. Each
//! evaluation builds a fresh `Findings` accumulator, so one checker can be
//! shared across `rayon` workers without coordination.

use crate::config::{validate_rule_ids, Effective};
use crate::error::{ConfigError, TargetError};
use crate::models::{Findings, PageKind, Report, DEFAULT_ADMIN_MARKERS};
use crate::rules::{default_rules, Rule, Source};
use glob::glob;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Checker {
    rules: Vec<Box<dyn Rule>>,
    admin_markers: Vec<String>,
}

impl Default for Checker {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            admin_markers: DEFAULT_ADMIN_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Checker {
    /// Build a checker with custom admin markers and some rules switched off.
    pub fn new(admin_markers: Vec<String>, disabled: &[String]) -> Result<Self, ConfigError> {
        validate_rule_ids(disabled)?;
        let rules = default_rules()
            .into_iter()
            .filter(|r| !disabled.iter().any(|d| d == r.id()))
            .collect();
        Ok(Self {
            rules,
            admin_markers,
        })
    }

    pub fn from_effective(eff: &Effective) -> Result<Self, ConfigError> {
        Self::new(eff.admin_markers.clone(), &eff.disabled_rules)
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    pub fn classify(&self, path: &str) -> PageKind {
        PageKind::classify(path, self.admin_markers.as_slice())
    }

    /// Evaluate already-loaded `text`. `path` classifies the page and is
    /// echoed into the report.
    pub fn check_source(&self, path: &str, text: &str) -> Report {
        let page = self.classify(path);
        let source = Source::new(text, page);
        let mut findings = Findings::new();
        for rule in &self.rules {
            findings.extend(rule.evaluate(&source));
        }
        findings.into_report(path, page)
    }

    /// Read `path` and evaluate it, reporting it as `display`.
    ///
    /// A read failure short-circuits into a single-error report.
    pub fn check_file(&self, path: &Path, display: &str) -> Report {
        match fs::read(path) {
            Ok(bytes) => self.check_source(display, &String::from_utf8_lossy(&bytes)),
            Err(e) => Report::unreadable(display, self.classify(display), &e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file to check plus the name it is reported (and classified) under.
pub struct Target {
    pub path: PathBuf,
    pub display: String,
}

fn is_glob(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

fn display_for(path: &Path, base: Option<&Path>) -> String {
    let shown = base
        .and_then(|b| pathdiff::diff_paths(path, b))
        .filter(|p| !p.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf());
    shown.to_string_lossy().replace('\\', "/")
}

/// Append files matching `pattern` (sorted) that were not seen before.
fn expand(
    pattern: &str,
    base: Option<&Path>,
    out: &mut Vec<Target>,
    seen: &mut HashSet<PathBuf>,
) -> Result<(), TargetError> {
    let entries = glob(pattern).map_err(|source| TargetError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut matched: Vec<PathBuf> = entries.flatten().filter(|p| p.is_file()).collect();
    matched.sort();
    for p in matched {
        if seen.insert(p.clone()) {
            out.push(Target {
                display: display_for(&p, base),
                path: p,
            });
        }
    }
    Ok(())
}

/// Turn CLI arguments into targets. Literal paths are kept as given (even
/// if missing, so the read failure is reported); arguments containing glob
/// metacharacters are expanded relative to the working directory.
pub fn targets_from_args(args: &[String]) -> Result<Vec<Target>, TargetError> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for arg in args {
        if is_glob(arg) {
            expand(arg, None, &mut out, &mut seen)?;
        } else if seen.insert(PathBuf::from(arg)) {
            out.push(Target {
                path: PathBuf::from(arg),
                display: arg.replace('\\', "/"),
            });
        }
    }
    Ok(out)
}

/// Expand configured `patterns` under `root`; files are shown relative to it.
pub fn targets_from_patterns(root: &Path, patterns: &[String]) -> Result<Vec<Target>, TargetError> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for pat in patterns {
        let abs = root.join(pat).to_string_lossy().to_string();
        expand(&abs, Some(root), &mut out, &mut seen)?;
    }
    Ok(out)
}

/// Check all `targets` in parallel; reports come back in target order.
pub fn run_check(checker: &Checker, targets: &[Target]) -> Vec<Report> {
    targets
        .par_iter()
        .map(|t| checker.check_file(&t.path, &t.display))
        .collect()
}
