//! pagelint CLI binary entry point.
//! Delegates to library modules for checking and prints results.

use clap::Parser;
use pagelint::cli::{Cli, Commands};
use pagelint::config::{self, Effective};
use pagelint::lint::{self, Checker, Target};
use pagelint::utils::{error_prefix, info_prefix, note_prefix};
use pagelint::{output, rules};
use std::process;

/// Print a prefixed error and exit with the configuration failure code.
fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", error_prefix(), msg);
    process::exit(2);
}

fn collect_targets(files: &[String], eff: &Effective) -> Vec<Target> {
    let targets = if !files.is_empty() {
        lint::targets_from_args(files)
    } else {
        if eff.output != "json" && !eff.patterns.is_empty() {
            eprintln!(
                "{} Using configured patterns: [{}]",
                info_prefix(),
                eff.patterns.join(", ")
            );
        }
        lint::targets_from_patterns(&eff.repo_root, &eff.patterns)
    };
    targets.unwrap_or_else(|e| fail(e))
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            files,
            repo_root,
            output: out_mode,
            min_score,
        } => {
            let eff = config::resolve_effective(repo_root.as_deref(), out_mode.as_deref(), min_score)
                .unwrap_or_else(|e| fail(e));
            if files.is_empty() && eff.patterns.is_empty() {
                eprintln!("Usage: pagelint check <file>...");
                process::exit(1);
            }
            if !eff.config_found && eff.output != "json" {
                eprintln!("{} No pagelint.toml found; using defaults.", note_prefix());
            }
            let checker = Checker::from_effective(&eff).unwrap_or_else(|e| fail(e));
            let targets = collect_targets(&files, &eff);
            if targets.is_empty() {
                fail("No files matched.");
            }
            let reports = lint::run_check(&checker, &targets);
            output::print_reports(&reports, &eff.output);

            let has_errors = reports.iter().any(|r| r.has_errors());
            let below_min = eff
                .min_score
                .is_some_and(|min| reports.iter().any(|r| r.score() < min));
            if has_errors || below_min {
                process::exit(1);
            }
        }
        Commands::Rules { output: out_mode } => {
            let mode = out_mode.unwrap_or_else(|| "human".to_string());
            if !config::OUTPUT_MODES.contains(&mode.as_str()) {
                fail(format!("unsupported output mode '{}' (expected human|json)", mode));
            }
            output::print_rules(&rules::default_rules(), &mode);
        }
        Commands::Init { repo_root, force } => {
            let root = std::path::PathBuf::from(repo_root.unwrap_or_else(|| ".".to_string()));
            match config::save_config(&root, &config::default_config(), force) {
                Ok(path) => println!("wrote: {}", path.to_string_lossy()),
                Err(e) => fail(e),
            }
        }
    }
}
