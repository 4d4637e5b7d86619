//! Run-summary rendering for the report command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! the aggregate counts and the report path.

use crate::models::ReportTotals;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the post-build summary in the requested format.
pub fn print_report(totals: &ReportTotals, report_path: &str, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(totals, report_path)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let status = if totals.failures > 0 {
                if color {
                    format!("{} failures", totals.failures).red().bold().to_string()
                } else {
                    format!("{} failures", totals.failures)
                }
            } else if color {
                "no failures".green().bold().to_string()
            } else {
                "no failures".to_string()
            };
            let path = if color {
                report_path.bold().to_string()
            } else {
                report_path.to_string()
            };
            println!(
                "— Report — files={} tests={} {} → {}",
                totals.files, totals.tests, status, path
            );
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(totals: &ReportTotals, report_path: &str) -> JsonVal {
    json!({
        "summary": totals,
        "report": report_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_report_json_shape() {
        let totals = ReportTotals {
            files: 2,
            tests: 5,
            failures: 4,
        };
        let out = compose_report_json(&totals, "reports/junit.xml");
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["summary"]["tests"], 5);
        assert_eq!(out["summary"]["failures"], 4);
        assert_eq!(out["report"], "reports/junit.xml");
    }
}
