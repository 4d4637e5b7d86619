//! Junitize CLI binary entry point.
//! Delegates to modules for report building and prints results.

mod cli;
mod config;
mod group;
mod models;
mod output;
mod report;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use group::IssueGroups;
use models::{Issue, ReportOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            repo_root,
            input,
            out,
            suite_name,
            show_info,
            show_snippet,
            output,
            files,
            check,
        } => {
            let started = Instant::now();
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                input.as_deref(),
                out.as_deref(),
                suite_name.as_deref(),
                show_info,
                show_snippet,
                output.as_deref(),
                &files,
            );
            // Require a findings input (no default)
            let Some(input_path) = eff.input.clone() else {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "Findings input is not configured. Pass --input or add junitize.toml."
                );
                std::process::exit(2);
            };
            // Friendly note if no junitize config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No junitize.toml found; using defaults."
                );
            }

            let input_file = resolve_against(&eff.repo_root, &input_path);
            let data = match fs::read_to_string(&input_file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!(
                            "Findings file not found or unreadable: {} ({})",
                            input_file.to_string_lossy(),
                            e
                        )
                    );
                    std::process::exit(2);
                }
            };
            let issues: Vec<Issue> = match serde_json::from_str(&data) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!(
                            "Findings file is not a valid issue array: {} ({})",
                            input_file.to_string_lossy(),
                            e
                        )
                    );
                    std::process::exit(2);
                }
            };

            let universe = match collect_universe(&eff.repo_root, &eff.files) {
                Ok(v) => v,
                Err(msg) => {
                    eprintln!("{} {}", utils::error_prefix(), msg);
                    std::process::exit(2);
                }
            };

            // Analyzers tend to emit absolute paths; label files the way the
            // repository sees them, like the universe entries.
            let root_abs = fs::canonicalize(&eff.repo_root)
                .unwrap_or_else(|_| eff.repo_root.clone());
            let issues: Vec<Issue> = issues
                .into_iter()
                .map(|mut is| {
                    is.file_path = utils::relativize(&root_abs, &is.file_path);
                    is
                })
                .collect();

            let groups = IssueGroups::from_findings(universe, issues);
            let opts = ReportOptions {
                show_info: eff.show_info,
                show_snippet: eff.show_snippet,
            };
            let time_taken = format!("{:.1}", started.elapsed().as_secs_f64());
            let (xml, totals) =
                report::create_report(&groups, &eff.suite_name, &time_taken, opts);

            let out_file = resolve_against(&eff.repo_root, &eff.filepath);
            if let Err(e) = fs::write(&out_file, &xml) {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Could not write report: {} ({})",
                        out_file.to_string_lossy(),
                        e
                    )
                );
                std::process::exit(2);
            }

            output::print_report(&totals, &out_file.to_string_lossy(), &eff.output);
            if check && totals.failures > 0 {
                std::process::exit(1);
            }
        }
    }
}

/// Resolve a possibly-relative path against the repository root.
fn resolve_against(root: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Expand the `--files` globs into the analyzed-file universe, relative to
/// the repository root. Pattern order and per-pattern match order carry
/// through to the report.
fn collect_universe(root: &Path, patterns: &[String]) -> Result<Vec<String>, String> {
    let mut universe: Vec<String> = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = glob::glob(&pattern)
            .map_err(|e| format!("Bad --files pattern '{}': {}", pat, e))?;
        for entry in entries.flatten() {
            if !entry.is_file() {
                continue;
            }
            let rel = entry
                .strip_prefix(root)
                .map(|r| r.to_string_lossy().to_string())
                .unwrap_or_else(|_| utils::relativize(root, &entry.to_string_lossy()));
            universe.push(rel);
        }
    }
    Ok(universe)
}
