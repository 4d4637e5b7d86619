//! Supporting helpers: stderr prefixes and path relativization.

use owo_colors::OwoColorize;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal messages on stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for non-fatal notes on stderr.
pub fn note_prefix() -> String {
    if use_colors() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Express `path` relative to `root` when possible.
///
/// Analyzers tend to emit absolute paths; the report labels files the way
/// the repository sees them. Relative inputs pass through untouched.
pub fn relativize(root: &Path, path: &str) -> String {
    let p = Path::new(path);
    if !p.is_absolute() {
        return path.to_string();
    }
    match pathdiff::diff_paths(p, root) {
        Some(rel) => rel.to_string_lossy().to_string(),
        None => path.to_string(),
    }
}
