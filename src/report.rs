//! JUnit XML report building.
//!
//! Pure transformation from grouped findings to a JUnit-shaped XML document:
//! one `<testsuite>` per analyzed file, one `<testcase>` per issue (or a
//! single clean case for files without issues), `<failure>` for
//! error-severity issues and `<skipped>` for the rest. The markup is
//! hand-assembled; escaping is applied exactly once so text round-trips
//! through an XML parser back to the original characters.
//!
//! Counts are threaded through return values; nothing is shared between
//! builds and repeated calls are independent.

use crate::group::IssueGroups;
use crate::models::{Issue, ReportOptions, ReportTotals};

/// Escape the five XML-significant characters for text and attribute content.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Derive the JUnit `classname` from a file path: separators become dots
/// and the final extension is dropped (`src/Foo.php` -> `src.Foo`).
fn classname(file_path: &str) -> String {
    let dotted = file_path.replace(['/', '\\'], ".");
    match dotted.rfind('.') {
        Some(pos) if pos > 0 => dotted[..pos].to_string(),
        _ => dotted,
    }
}

/// Build the XML document for the given groups.
///
/// `time_taken` is a pre-formatted decimal string supplied by the caller;
/// it is embedded verbatim. See [`create_report`] when the aggregate counts
/// are needed alongside the document.
pub fn create_xml(
    groups: &IssueGroups,
    suite_name: &str,
    time_taken: &str,
    opts: ReportOptions,
) -> String {
    create_report(groups, suite_name, time_taken, opts).0
}

/// Build the XML document plus the aggregate totals.
pub fn create_report(
    groups: &IssueGroups,
    suite_name: &str,
    time_taken: &str,
    opts: ReportOptions,
) -> (String, ReportTotals) {
    let mut body = String::new();
    let mut total_tests = 0usize;
    let mut total_failures = 0usize;
    for (file_path, issues) in groups.iter() {
        let (suite, tests, failures) = build_testsuite(file_path, issues, opts);
        body.push_str(&suite);
        total_tests += tests;
        total_failures += failures;
    }

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<testsuites name=\"{}\" time=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
        escape_xml(suite_name),
        escape_xml(time_taken),
        total_tests,
        total_failures
    ));
    xml.push_str(&body);
    xml.push_str("</testsuites>\n");

    let totals = ReportTotals {
        files: groups.len(),
        tests: total_tests,
        failures: total_failures,
    };
    (xml, totals)
}

/// Build one `<testsuite>` for a file, returning its test/failure counts.
///
/// A file without issues still produces one synthetic passing case so it
/// shows up as "passed" instead of disappearing from the dashboard. When
/// `show_info` is false the `tests` attribute shrinks to the failure count,
/// though non-failing issues are still iterated and emitted as bare cases.
fn build_testsuite(
    file_path: &str,
    issues: &[Issue],
    opts: ReportOptions,
) -> (String, usize, usize) {
    let mut cases = String::new();
    let mut failures = 0usize;
    let mut tests = issues.len();

    if issues.is_empty() {
        tests = 1;
        cases.push_str(&format!(
            "    <testcase name=\"{}\" classname=\"{}\"/>\n",
            escape_xml(file_path),
            escape_xml(&classname(file_path))
        ));
    }

    for issue in issues {
        let (case, is_failing) = build_testcase(issue, opts);
        cases.push_str(&case);
        if is_failing {
            failures += 1;
        }
    }

    if !opts.show_info && !issues.is_empty() {
        tests = failures;
    }

    let mut suite = String::new();
    suite.push_str(&format!(
        "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
        escape_xml(file_path),
        tests,
        failures
    ));
    suite.push_str(&cases);
    suite.push_str("  </testsuite>\n");
    (suite, tests, failures)
}

/// Build one `<testcase>` for an issue and classify it as failing or not.
fn build_testcase(issue: &Issue, opts: ReportOptions) -> (String, bool) {
    let name = format!(
        "{} at {} ({}:{})",
        issue.kind, issue.file_path, issue.line_from, issue.column_from
    );
    let message = escape_xml(&issue.message);

    // Body text: header line plus, when enabled, the snippet annotated with
    // line numbers counting up from line_from. Assembled from pre-escaped
    // fragments and emitted raw.
    let mut body = format!(
        "{}: {} - {}:{}:{} - {}\n",
        escape_xml(&issue.severity),
        escape_xml(&issue.kind),
        escape_xml(&issue.file_path),
        issue.line_from,
        issue.column_from,
        message
    );
    if opts.show_snippet {
        let mut line_no = issue.line_from;
        for line in issue.snippet.split('\n') {
            body.push_str(&format!("{}:{}\n", line_no, escape_xml(line)));
            line_no += 1;
        }
    }

    let mut case = String::new();
    let is_failing = issue.severity == "error";
    let open = format!(
        "    <testcase name=\"{}\" classname=\"{}\"",
        escape_xml(&name),
        escape_xml(&classname(&issue.file_path))
    );
    if is_failing {
        case.push_str(&open);
        case.push_str(">\n");
        case.push_str(&format!(
            "      <failure type=\"{}\" message=\"{}\">{}</failure>\n",
            escape_xml(&issue.severity),
            message,
            body
        ));
        case.push_str("    </testcase>\n");
    } else if opts.show_info {
        case.push_str(&open);
        case.push_str(">\n");
        case.push_str(&format!(
            "      <skipped message=\"{}\">{}</skipped>\n",
            message, body
        ));
        case.push_str("    </testcase>\n");
    } else {
        // Not counted in the suite's tests tally, but still visible.
        case.push_str(&open);
        case.push_str("/>\n");
    }
    (case, is_failing)
}
