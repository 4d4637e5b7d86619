//! Junitize core library.
//!
//! This crate exposes programmatic APIs for turning a static analyzer's
//! findings into a JUnit-compatible XML report grouped by analyzed file.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `group`: Insertion-ordered grouping of findings by file path.
//! - `report`: The report builder producing schema-valid JUnit XML.
//! - `models`: Data models for issues, options, and report totals.
//! - `output`: Human/JSON run-summary printers.
//! - `utils`: Supporting helpers.

pub mod cli;
pub mod config;
pub mod group;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
