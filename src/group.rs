//! Grouping of findings by file path.
//!
//! The report lists every analyzed file, including files with zero issues,
//! so groups are seeded from the analyzed-file universe first. Findings are
//! appended under their own file path; a path outside the universe extends
//! the map with a new trailing key rather than being dropped. Iteration
//! yields entries in insertion order, and issues within a group keep the
//! order they arrived in.

use crate::models::Issue;
use std::collections::HashMap;

#[derive(Debug, Default)]
/// Insertion-ordered mapping from file path to the issues found in it.
pub struct IssueGroups {
    order: Vec<String>,
    by_file: HashMap<String, Vec<Issue>>,
}

impl IssueGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build groups from the analyzed-file universe plus the findings list.
    pub fn from_findings<U>(universe: U, issues: Vec<Issue>) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let mut groups = Self::new();
        for file_path in universe {
            groups.seed(&file_path.into());
        }
        for issue in issues {
            groups.push(issue);
        }
        groups
    }

    /// Register an analyzed file so it appears in the report even when clean.
    pub fn seed(&mut self, file_path: &str) {
        if !self.by_file.contains_key(file_path) {
            self.order.push(file_path.to_string());
            self.by_file.insert(file_path.to_string(), Vec::new());
        }
    }

    /// Append an issue under its file path, extending the universe if needed.
    pub fn push(&mut self, issue: Issue) {
        self.seed(&issue.file_path.clone());
        if let Some(list) = self.by_file.get_mut(&issue.file_path) {
            list.push(issue);
        }
    }

    /// Iterate `(file_path, issues)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Issue])> {
        self.order.iter().map(move |key| {
            let issues = self
                .by_file
                .get(key)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (key.as_str(), issues)
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(file: &str, severity: &str) -> Issue {
        Issue {
            severity: severity.to_string(),
            line_from: 1,
            line_to: 1,
            column_from: 1,
            column_to: 2,
            kind: "UndefinedVariable".to_string(),
            message: "msg".to_string(),
            file_path: file.to_string(),
            snippet: "$i++".to_string(),
        }
    }

    #[test]
    fn test_universe_order_preserved_and_clean_files_kept() {
        let groups = IssueGroups::from_findings(
            ["b.php", "a.php", "c.php"],
            vec![issue("a.php", "error")],
        );
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b.php", "a.php", "c.php"]);
        let sizes: Vec<usize> = groups.iter().map(|(_, v)| v.len()).collect();
        assert_eq!(sizes, vec![0, 1, 0]);
    }

    #[test]
    fn test_out_of_universe_finding_appends_trailing_key() {
        let groups = IssueGroups::from_findings(
            ["a.php"],
            vec![issue("zzz.php", "error"), issue("a.php", "info")],
        );
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a.php", "zzz.php"]);
    }

    #[test]
    fn test_in_group_order_is_input_order() {
        let mut first = issue("a.php", "error");
        first.message = "first".to_string();
        let mut second = issue("a.php", "info");
        second.message = "second".to_string();
        let groups = IssueGroups::from_findings(["a.php"], vec![first, second]);
        let (_, issues) = groups.iter().next().unwrap();
        assert_eq!(issues[0].message, "first");
        assert_eq!(issues[1].message, "second");
    }
}
