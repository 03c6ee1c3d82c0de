//! assertlint CLI

use anyhow::{Context, Result};
use assertlint::config::{build_ignore_set, is_ignored, load_config, RuleOptions};
use assertlint::reporter::{ConsoleReporter, JsonReporter};
use assertlint::FileReport;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// assertlint: assertion budget linter for JavaScript/TypeScript test files
#[derive(Parser, Debug)]
#[command(name = "assertlint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Test file or directory to check
    path: PathBuf,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line per flagged file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (also list clean files)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .assertlintrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum assertions per test (overrides the config file)
    #[arg(long, value_name = "N")]
    limit: Option<i64>,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let work_dir = if args.path.is_file() {
        args.path.parent().unwrap_or(Path::new("."))
    } else {
        args.path.as_path()
    };

    // Load config; CLI flags override config file values
    let config = load_config(work_dir, args.config.as_deref())
        .context("Failed to load configuration")?
        .merge_with_cli(args.limit);
    let options = RuleOptions::from(&config);

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let test_patterns = config.get_test_patterns();
    let test_files = collect_test_files(&args.path, ignore_set.as_ref(), &test_patterns)?;

    if test_files.is_empty() {
        eprintln!("{}: No test files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let (reports, had_errors) = check_files(&test_files, &options);

    if reports.is_empty() {
        eprintln!("{}: All files failed to check", "Error".red());
        return Ok(ExitCode::from(2));
    }

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if reports.len() == 1 {
            println!("{}", reporter.report(&reports[0]));
        } else {
            println!("{}", reporter.report_many(&reports));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for report in &reports {
            reporter.report_quiet(report);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report_many(&reports);
    }

    if had_errors {
        return Ok(ExitCode::from(2));
    }
    if reports.iter().any(|r| !r.is_clean()) {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

/// Check the files in parallel. A per-file failure is named on stderr and
/// skipped; quiet mode trims output but never hides which file failed.
fn check_files(files: &[PathBuf], options: &RuleOptions) -> (Vec<FileReport>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|file| match assertlint::check_file(file, options) {
            Ok(report) => Some(report),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                eprintln!(
                    "{}: Failed to check {}: {:#}",
                    "Error".red(),
                    file.display(),
                    e
                );
                None
            }
        })
        .collect();

    // Stable output order regardless of thread scheduling
    reports.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    (reports, had_errors.load(Ordering::Relaxed))
}

fn collect_test_files(
    path: &PathBuf,
    ignore_set: Option<&globset::GlobSet>,
    test_patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.clone()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if is_test_file(file_path, test_patterns) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    files.sort();

    Ok(files)
}

fn is_test_file(path: &Path, test_patterns: &[&str]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    // Skip node_modules
    if path.components().any(|c| c.as_os_str() == "node_modules") {
        return false;
    }

    test_patterns.iter().any(|p| name.ends_with(p))
}
