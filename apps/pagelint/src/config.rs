//! Configuration discovery and effective settings resolution.
//!
//! pagelint reads `pagelint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `patterns`: none (files must be passed on the command line)
//! - `output`: `human`
//! - `min_score`: unset
//! - `classify.admin_markers`: `["/admin/", "Admin"]`
//! - `rules.disabled`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::models::DEFAULT_ADMIN_MARKERS;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names searched in order.
pub const CONFIG_FILES: &[&str] = &["pagelint.toml", "pagelint.yaml", "pagelint.yml"];

pub const OUTPUT_MODES: &[&str] = &["human", "json"];

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
/// Page classification section under `[classify]`.
pub struct ClassifyCfg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_markers: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
/// Rule selection section under `[rules]`.
pub struct RulesCfg {
    #[serde(default)]
    pub disabled: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
/// Root configuration loaded from `pagelint.toml|yaml`.
pub struct PagelintConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classify: Option<ClassifyCfg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub patterns: Vec<String>,
    pub output: String,
    pub min_score: Option<u32>,
    pub admin_markers: Vec<String>,
    pub disabled_rules: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `pagelint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PagelintConfig` from the first config file present under `root`.
///
/// `Ok(None)` means no config file exists; a file that exists but does not
/// parse is an error rather than a silent fallback to defaults.
pub fn load_config(root: &Path) -> Result<Option<PagelintConfig>, ConfigError> {
    for name in CONFIG_FILES {
        let p = root.join(name);
        if !p.exists() {
            continue;
        }
        let path = p.to_string_lossy().to_string();
        let s = fs::read_to_string(&p).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let cfg = if name.ends_with(".toml") {
            toml::from_str(&s).map_err(|source| ConfigError::Toml { path, source })?
        } else {
            serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml { path, source })?
        };
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_min_score: Option<u32>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    // Absolute root so glob results can be shown relative to it
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if !OUTPUT_MODES.contains(&output.as_str()) {
        return Err(ConfigError::UnknownOutput(output));
    }

    let min_score = cli_min_score.or(cfg.min_score);

    let admin_markers = cfg
        .classify
        .and_then(|c| c.admin_markers)
        .unwrap_or_else(|| DEFAULT_ADMIN_MARKERS.iter().map(|m| m.to_string()).collect());

    let disabled_rules = cfg.rules.map(|r| r.disabled).unwrap_or_default();
    validate_rule_ids(&disabled_rules)?;

    Ok(Effective {
        repo_root,
        config_found,
        patterns: cfg.patterns.unwrap_or_default(),
        output,
        min_score,
        admin_markers,
        disabled_rules,
    })
}

/// Reject rule ids that no built-in rule carries.
pub fn validate_rule_ids(ids: &[String]) -> Result<(), ConfigError> {
    let known = rules::rule_ids();
    match ids.iter().find(|id| !known.contains(&id.as_str())) {
        Some(id) => Err(ConfigError::UnknownRule(id.clone())),
        None => Ok(()),
    }
}

/// Starter configuration written by `pagelint init`.
pub fn default_config() -> PagelintConfig {
    PagelintConfig {
        patterns: Some(vec!["src/pages/**/*.tsx".to_string()]),
        output: Some("human".to_string()),
        min_score: None,
        classify: Some(ClassifyCfg {
            admin_markers: Some(DEFAULT_ADMIN_MARKERS.iter().map(|m| m.to_string()).collect()),
        }),
        rules: Some(RulesCfg::default()),
    }
}

/// Write `cfg` to `<root>/pagelint.toml`. Refuses to overwrite unless `force`.
pub fn save_config(root: &Path, cfg: &PagelintConfig, force: bool) -> Result<PathBuf, ConfigError> {
    let path = root.join(CONFIG_FILES[0]);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_string_lossy().to_string(),
        });
    }
    let body = toml::to_string_pretty(cfg)?;
    fs::write(&path, body).map_err(|source| ConfigError::Write {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pagelint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
patterns = ["src/pages/**/*.tsx"]
output = "json"
min_score = 75
[classify]
admin_markers = ["/backoffice/"]
[rules]
disabled = ["responsive-design"]
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None).unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.patterns, vec!["src/pages/**/*.tsx"]);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.min_score, Some(75));
        assert_eq!(eff.admin_markers, vec!["/backoffice/"]);
        assert_eq!(eff.disabled_rules, vec!["responsive-design"]);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("pagelint.yaml"), "patterns:\n  - pages/*.tsx\n").unwrap();

        let eff = resolve_effective(root.to_str(), None, None).unwrap();
        assert_eq!(eff.patterns, vec!["pages/*.tsx"]);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.min_score, None);
        assert_eq!(eff.admin_markers, vec!["/admin/", "Admin"]);
        assert!(eff.disabled_rules.is_empty());
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("pagelint.toml"), "output = \"json\"\nmin_score = 50\n").unwrap();

        let eff = resolve_effective(root.to_str(), Some("human"), Some(90)).unwrap();
        assert_eq!(eff.output, "human");
        assert_eq!(eff.min_score, Some(90));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None).unwrap();
        assert!(!eff.config_found);
        assert!(eff.patterns.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pagelint.toml"), "patterns = [").unwrap();
        let err = resolve_effective(dir.path().to_str(), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_unknown_rule_and_output_rejected() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("pagelint.toml"),
            "[rules]\ndisabled = [\"no-such-rule\"]\n",
        )
        .unwrap();
        let err = resolve_effective(dir.path().to_str(), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule(ref id) if id == "no-such-rule"));

        let dir = tempdir().unwrap();
        let err = resolve_effective(dir.path().to_str(), Some("xml"), None).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOutput(_)));
    }

    #[test]
    fn test_detect_repo_root_walks_up() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("pagelint.toml"), "").unwrap();
        let nested = root.join("src/pages");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_repo_root(&nested), root);
    }

    #[test]
    fn test_save_config_roundtrip_and_no_overwrite() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let path = save_config(root, &default_config(), false).unwrap();
        assert!(path.ends_with("pagelint.toml"));

        let loaded = load_config(root).unwrap().unwrap();
        assert_eq!(loaded.patterns, Some(vec!["src/pages/**/*.tsx".to_string()]));

        let err = save_config(root, &default_config(), false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists { .. }));
        assert!(save_config(root, &default_config(), true).is_ok());
    }
}
