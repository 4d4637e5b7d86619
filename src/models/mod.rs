//! Shared data models for findings input and report output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
/// One diagnostic finding from the analyzer, as found in the findings JSON.
///
/// Only `severity == "error"` counts as failing; every other value
/// ("info", "warning", ...) is non-failing. The analyzer's `type` key is
/// mapped to `kind` because `type` is reserved in Rust.
pub struct Issue {
    pub severity: String,
    pub line_from: u32,
    pub line_to: u32,
    pub column_from: u32,
    pub column_to: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub file_path: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Copy)]
/// Resolved report options, immutable for the duration of one build.
pub struct ReportOptions {
    /// Include non-failing issues as `<skipped>` entries and in test counts.
    pub show_info: bool,
    /// Render the annotated snippet block inside failure/skipped bodies.
    pub show_snippet: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_info: true,
            show_snippet: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
/// Aggregate counts for one built report, used by printers and exit codes.
pub struct ReportTotals {
    pub files: usize,
    pub tests: usize,
    pub failures: usize,
}
