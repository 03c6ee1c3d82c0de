//! Console reporter with colored output

use crate::FileReport;
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to show clean files too
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Also print files with no findings
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single file's findings
    pub fn report(&self, report: &FileReport) {
        if report.is_clean() {
            if self.verbose {
                println!(
                    "{} {}",
                    report.file_path.display().to_string().bold(),
                    "clean".green()
                );
            }
            return;
        }

        println!("{}", report.file_path.display().to_string().bold());
        for diagnostic in &report.diagnostics {
            println!(
                "  {}  {}",
                format!("{}:{}", diagnostic.location.line, diagnostic.location.column).dimmed(),
                diagnostic.message
            );
        }
        println!();
    }

    /// Report many files, followed by a one-line summary
    pub fn report_many(&self, reports: &[FileReport]) {
        for report in reports {
            self.report(report);
        }
        self.print_summary(reports);
    }

    /// Report in quiet mode: one line per file with findings
    pub fn report_quiet(&self, report: &FileReport) {
        if !report.is_clean() {
            println!(
                "{}: {} problem(s)",
                report.file_path.display(),
                report.diagnostics.len()
            );
        }
    }

    fn print_summary(&self, reports: &[FileReport]) {
        let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
        let flagged = reports.iter().filter(|r| !r.is_clean()).count();
        if total == 0 {
            println!(
                "{} {} file(s) checked, no assertion problems",
                "OK".green().bold(),
                reports.len()
            );
        } else {
            println!(
                "{} {} problem(s) in {} of {} file(s)",
                "Found".red().bold(),
                total,
                flagged,
                reports.len()
            );
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
