//! Configuration discovery and effective settings resolution.
//!
//! Junitize reads `junitize.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `filepath`: `junitize_report.xml`
//! - `suiteName`: `junitize <version>`
//! - `showInfo`: true
//! - `showSnippet`: true
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `junitize.toml|yaml`.
///
/// Key names keep the camelCase vocabulary of the original analyzer-plugin
/// config (`showInfo`, `showSnippet`).
pub struct JunitizeConfig {
    pub input: Option<String>,
    pub filepath: Option<String>,
    #[serde(rename = "suiteName")]
    pub suite_name: Option<String>,
    #[serde(rename = "showInfo")]
    pub show_info: Option<bool>,
    #[serde(rename = "showSnippet")]
    pub show_snippet: Option<bool>,
    pub output: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the report command.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Findings JSON path; `None` when neither CLI nor config supplied one.
    pub input: Option<String>,
    pub filepath: String,
    pub suite_name: String,
    pub show_info: bool,
    pub show_snippet: bool,
    pub output: String,
    /// Glob patterns enumerating the analyzed-file universe.
    pub files: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `junitize.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("junitize.toml").exists()
            || cur.join("junitize.yaml").exists()
            || cur.join("junitize.yml").exists()
        {
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

/// Load `JunitizeConfig` from `junitize.toml` or `junitize.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<JunitizeConfig> {
    let toml_path = root.join("junitize.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: JunitizeConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["junitize.yaml", "junitize.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: JunitizeConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
#[allow(clippy::too_many_arguments)]
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_input: Option<&str>,
    cli_out: Option<&str>,
    cli_suite_name: Option<&str>,
    cli_show_info: Option<bool>,
    cli_show_snippet: Option<bool>,
    cli_output: Option<&str>,
    cli_files: &[String],
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let input = cli_input.map(|s| s.to_string()).or(cfg.input);

    let filepath = cli_out
        .map(|s| s.to_string())
        .or(cfg.filepath)
        .unwrap_or_else(|| "junitize_report.xml".to_string());

    let suite_name = cli_suite_name
        .map(|s| s.to_string())
        .or(cfg.suite_name)
        .unwrap_or_else(|| format!("junitize {}", env!("CARGO_PKG_VERSION")));

    let show_info = cli_show_info.or(cfg.show_info).unwrap_or(true);
    let show_snippet = cli_show_snippet.or(cfg.show_snippet).unwrap_or(true);

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let files = if cli_files.is_empty() {
        cfg.files.unwrap_or_default()
    } else {
        cli_files.to_vec()
    };

    Effective {
        repo_root,
        input,
        filepath,
        suite_name,
        show_info,
        show_snippet,
        output,
        files,
    }
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
        let mut f = fs::File::create(root.join("junitize.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
input = "findings.json"
filepath = "reports/junit.xml"
showInfo = false
output = "json"
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None, None, None, None, &[]);
        assert_eq!(eff.input.as_deref(), Some("findings.json"));
        assert_eq!(eff.filepath, "reports/junit.xml");
        assert!(!eff.show_info);
        assert!(eff.show_snippet);
        assert_eq!(eff.output, "json");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("junitize.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
input: findings.json
files:
  - "src/**/*.php"
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None, None, None, None, &[]);
        assert_eq!(eff.input.as_deref(), Some("findings.json"));
        assert_eq!(eff.filepath, "junitize_report.xml");
        assert_eq!(eff.files, vec!["src/**/*.php".to_string()]);
        assert!(eff.show_info);
        assert!(eff.show_snippet);
        assert_eq!(eff.output, "human");
        assert!(eff.suite_name.starts_with("junitize "));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("junitize.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
input = "findings.json"
showInfo = true
showSnippet = true
suiteName = "from config"
files = ["cfg/**/*.php"]
            "#
        )
        .unwrap();

        let cli_files = vec!["src/*.php".to_string()];
        let eff = resolve_effective(
            root.to_str(),
            Some("other.json"),
            Some("out.xml"),
            Some("from cli"),
            Some(false),
            Some(false),
            Some("json"),
            &cli_files,
        );
        assert_eq!(eff.input.as_deref(), Some("other.json"));
        assert_eq!(eff.filepath, "out.xml");
        assert_eq!(eff.suite_name, "from cli");
        assert!(!eff.show_info);
        assert!(!eff.show_snippet);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.files, cli_files);
    }

    #[test]
    fn test_input_unconfigured_without_config_or_flag() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let eff = resolve_effective(root.to_str(), None, None, None, None, None, None, &[]);
        assert!(eff.input.is_none());
    }
}
