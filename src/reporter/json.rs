//! JSON reporter for machine-readable output

use crate::FileReport;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single file's findings as JSON
    pub fn report(&self, report: &FileReport) -> String {
        if self.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report many files with a summary object
    pub fn report_many(&self, reports: &[FileReport]) -> String {
        let output = JsonOutput {
            results: reports,
            summary: JsonSummary {
                files_checked: reports.len(),
                files_flagged: reports.iter().filter(|r| !r.is_clean()).count(),
                total_problems: reports.iter().map(|r| r.diagnostics.len()).sum(),
            },
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [FileReport],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    files_checked: usize,
    files_flagged: usize,
    total_problems: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diagnostic, Location};
    use std::path::PathBuf;

    fn sample_report() -> FileReport {
        FileReport {
            file_path: PathBuf::from("sample.test.js"),
            diagnostics: vec![Diagnostic {
                message: "Test without assertions is not allowed.".to_string(),
                location: Location::new(3, 1),
            }],
        }
    }

    #[test]
    fn single_report_round_trips_as_json() {
        let output = JsonReporter::new().report(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["filePath"], "sample.test.js");
        assert_eq!(
            value["diagnostics"][0]["message"],
            "Test without assertions is not allowed."
        );
        assert_eq!(value["diagnostics"][0]["location"]["line"], 3);
    }

    #[test]
    fn summary_counts_flagged_files() {
        let clean = FileReport {
            file_path: PathBuf::from("clean.test.js"),
            diagnostics: vec![],
        };
        let output = JsonReporter::new().report_many(&[sample_report(), clean]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["filesChecked"], 2);
        assert_eq!(value["summary"]["filesFlagged"], 1);
        assert_eq!(value["summary"]["totalProblems"], 1);
    }
}
