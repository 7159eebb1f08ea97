//! Shared data models for findings, reports, and batch summaries.

pub mod page;

pub use page::{PageKind, DEFAULT_ADMIN_MARKERS};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Outcome category of a single check.
pub enum Severity {
    Error,
    Warning,
    Passed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One recorded outcome of a rule check.
pub struct Finding {
    pub severity: Severity,
    pub rule: &'static str,
    pub message: String,
}

impl Finding {
    pub fn error(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule,
            message: message.into(),
        }
    }

    pub fn warning(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            message: message.into(),
        }
    }

    pub fn passed(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Passed,
            rule,
            message: message.into(),
        }
    }

    /// `passed` when `ok`, otherwise `error`.
    pub fn require(rule: &'static str, ok: bool, pass: &str, fail: &str) -> Self {
        if ok {
            Self::passed(rule, pass)
        } else {
            Self::error(rule, fail)
        }
    }

    /// `passed` when `ok`, otherwise `warning`.
    pub fn recommend(rule: &'static str, ok: bool, pass: &str, fail: &str) -> Self {
        if ok {
            Self::passed(rule, pass)
        } else {
            Self::warning(rule, fail)
        }
    }
}

#[derive(Debug, Default)]
/// Append-only accumulator for one evaluation run.
pub struct Findings {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    passed: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Passed => self.passed.push(finding),
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.passed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freeze the accumulated findings into a report.
    pub fn into_report(self, file: impl Into<String>, page: PageKind) -> Report {
        let score = score(self.passed.len(), self.len());
        Report {
            file: file.into(),
            page,
            errors: self.errors,
            warnings: self.warnings,
            passed: self.passed,
            score,
        }
    }
}

impl Extend<Finding> for Findings {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        for f in iter {
            self.push(f);
        }
    }
}

/// Percentage of passed findings, rounded half-up; 0 when `total` is 0.
pub fn score(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * passed + total) / (2 * total)) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Immutable evaluation result for one file.
pub struct Report {
    file: String,
    page: PageKind,
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    passed: Vec<Finding>,
    score: u32,
}

impl Report {
    /// Report for a file that could not be read: a single error, score 0.
    pub fn unreadable(file: impl Into<String>, page: PageKind, reason: &str) -> Self {
        let mut findings = Findings::new();
        findings.push(Finding::error(
            "read-file",
            format!("Failed to read file: {}", reason),
        ));
        findings.into_report(file, page)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn passed(&self) -> &[Finding] {
        &self.passed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.passed.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All findings in severity-bucket order: errors, warnings, passed.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.passed.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts over a batch of reports.
pub struct Summary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
    pub passed: usize,
    pub failed_files: usize,
}

impl Summary {
    pub fn from_reports(reports: &[Report]) -> Self {
        let mut s = Summary::default();
        for r in reports {
            s.files += 1;
            s.errors += r.errors().len();
            s.warnings += r.warnings().len();
            s.passed += r.passed().len();
            if r.has_errors() {
                s.failed_files += 1;
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rounds_half_up() {
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(1, 3), 33);
        assert_eq!(score(2, 3), 67);
        assert_eq!(score(1, 8), 13); // 12.5
        assert_eq!(score(5, 5), 100);
    }

    #[test]
    fn test_findings_are_bucketed_in_push_order() {
        let mut f = Findings::new();
        f.push(Finding::passed("r", "p1"));
        f.push(Finding::error("r", "e1"));
        f.push(Finding::passed("r", "p2"));
        f.push(Finding::warning("r", "w1"));
        let report = f.into_report("a.tsx", PageKind::Standard);
        let passed: Vec<_> = report.passed().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(passed, vec!["p1", "p2"]);
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(report.total(), 4);
        assert_eq!(report.score(), 50);
    }

    #[test]
    fn test_empty_findings_score_zero() {
        let report = Findings::new().into_report("a.tsx", PageKind::Admin);
        assert_eq!(report.score(), 0);
        assert_eq!(report.total(), 0);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_unreadable_report_shape() {
        let report = Report::unreadable("missing.tsx", PageKind::Standard, "No such file");
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].message, "Failed to read file: No such file");
        assert!(report.warnings().is_empty());
        assert!(report.passed().is_empty());
        assert_eq!(report.score(), 0);
    }

    #[test]
    fn test_summary_counts_failed_files() {
        let mut a = Findings::new();
        a.push(Finding::error("r", "e"));
        a.push(Finding::passed("r", "p"));
        let mut b = Findings::new();
        b.push(Finding::warning("r", "w"));
        let reports = vec![
            a.into_report("a.tsx", PageKind::Standard),
            b.into_report("b.tsx", PageKind::Standard),
        ];
        let s = Summary::from_reports(&reports);
        assert_eq!(s.files, 2);
        assert_eq!(s.errors, 1);
        assert_eq!(s.warnings, 1);
        assert_eq!(s.passed, 1);
        assert_eq!(s.failed_files, 1);
    }
}
