//! Supporting helpers: coloured diagnostic prefixes for stderr messages.

use owo_colors::OwoColorize;

/// Whether coloured output is allowed for `output` mode.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    let tag = format!("⟦{}⟧", label);
    if use_colors("human") {
        paint(&tag)
    } else {
        tag
    }
}

pub fn error_prefix() -> String {
    prefix("error", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note", |s| s.bright_black().to_string())
}

pub fn info_prefix() -> String {
    prefix("info", |s| s.blue().bold().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_never_colored() {
        assert!(!use_colors("json"));
    }

    #[test]
    fn test_prefixes_contain_label() {
        assert!(error_prefix().contains("error"));
        assert!(note_prefix().contains("note"));
        assert!(info_prefix().contains("info"));
    }
}
