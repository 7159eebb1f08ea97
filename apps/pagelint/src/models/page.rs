//! Page classification derived from a file path.

use serde::Serialize;
use std::fmt;

/// Markers that flag a page as part of the admin area.
pub const DEFAULT_ADMIN_MARKERS: &[&str] = &["/admin/", "Admin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Kind of page under evaluation. Admin pages skip menu and sidebar checks.
pub enum PageKind {
    Standard,
    Admin,
}

impl PageKind {
    /// Classify `path` against `markers` (plain substring match).
    ///
    /// Backslashes are normalised to `/` first so Windows paths hit the
    /// `/admin/` marker as well.
    pub fn classify<S: AsRef<str>>(path: &str, markers: &[S]) -> Self {
        let normalized = path.replace('\\', "/");
        if markers
            .iter()
            .any(|m| !m.as_ref().is_empty() && normalized.contains(m.as_ref()))
        {
            PageKind::Admin
        } else {
            PageKind::Standard
        }
    }

    pub fn is_admin(self) -> bool {
        self == PageKind::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Standard => "standard",
            PageKind::Admin => "admin",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
