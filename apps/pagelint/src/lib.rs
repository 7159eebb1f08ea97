//! pagelint core library.
//!
//! This crate exposes programmatic APIs for checking React page sources
//! against house style rules and reporting the outcome.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery, effective configuration resolution, and `init`.
//! - `lint`: The rule evaluator, target expansion, and batch runner.
//! - `rules`: The individual house-style rules.
//! - `scan`: JSX opening-tag scanning used by markup rules.
//! - `models`: Findings, reports, page classification, summaries.
//! - `output`: Human/JSON printers.
//! - `error`: Configuration and target errors.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod scan;
pub mod utils;

pub use lint::Checker;
pub use models::{Finding, PageKind, Report, Severity};
