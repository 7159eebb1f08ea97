//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pagelint",
    version,
    about = "House-style compliance checker for React pages",
    long_about = "pagelint — check React page sources against house style rules (imports, theme classes, layout, menu wiring, dead controls, accessibility).\n\nConfiguration precedence: CLI > pagelint.toml > defaults.",
    after_help = "Examples:\n  pagelint check src/pages/Campaigns.tsx\n  pagelint check 'src/pages/**/*.tsx' --output json\n  pagelint check --min-score 80\n  pagelint rules\n  pagelint init",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current pagelint version."
    )]
    Version,
    /// Check page files
    #[command(
        about = "Check page files",
        long_about = "Evaluate page files against every enabled rule and print a report per file. Exits 1 when any report has an error or falls below --min-score.",
        after_help = "Examples:\n  pagelint check src/pages/Keywords.tsx\n  pagelint check 'src/pages/admin/*.tsx' --output json"
    )]
    Check {
        #[arg(help = "Files or glob patterns (default: patterns from pagelint.toml)")]
        files: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Fail when any file scores below this percentage")]
        min_score: Option<u32>,
    },
    /// List rules
    #[command(
        about = "List rules",
        long_about = "List rule ids and descriptions in evaluation order."
    )]
    Rules {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Write a starter config
    #[command(
        about = "Write pagelint.toml",
        long_about = "Write a starter pagelint.toml into the repository root."
    )]
    Init {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Overwrite an existing pagelint.toml")]
        force: bool,
    },
}
