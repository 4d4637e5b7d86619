//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "junitize",
    version,
    about = "JUnit XML reports from static-analysis findings",
    long_about = "Junitize — convert an analyzer's findings JSON into a JUnit-compatible XML report for CI dashboards.\n\nConfiguration precedence: CLI > junitize.toml > defaults.",
    after_help = "Examples:\n  junitize report --input findings.json\n  junitize report --input findings.json --files 'src/**/*.php' --out reports/junit.xml\n  junitize report --input findings.json --show-info false --check",
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
        long_about = "Print the current junitize version."
    )]
    Version,
    /// Build a JUnit XML report from findings
    #[command(
        about = "Build a JUnit XML report",
        long_about = "Read the analyzer's findings JSON, group issues by analyzed file, and write a JUnit-shaped XML report. Files matched by --files appear as passing suites even when no finding touches them.",
        after_help = "Examples:\n  junitize report --input findings.json\n  junitize report --input findings.json --files 'src/**/*.php'\n  junitize report --input findings.json --output json --check"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Findings JSON file (required via CLI or junitize.toml)")]
        input: Option<String>,
        #[arg(long, help = "Report destination (default: junitize_report.xml)")]
        out: Option<String>,
        #[arg(long, help = "Suite name on the report root (default: junitize <version>)")]
        suite_name: Option<String>,
        #[arg(long, value_name = "BOOL", help = "Include non-failing issues as skipped entries (default: true)")]
        show_info: Option<bool>,
        #[arg(long, value_name = "BOOL", help = "Include annotated code snippets (default: true)")]
        show_snippet: Option<bool>,
        #[arg(long, help = "Run summary format: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Glob for analyzed files; repeatable, clean files show as passing")]
        files: Vec<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when the report contains failures")]
        check: bool,
    },
}
