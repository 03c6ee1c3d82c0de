//! assertlint: assertion budget linter for JavaScript/TypeScript test files
//!
//! Flags `it`/`test` blocks that contain more assertions than a configured
//! limit, and blocks that contain no assertions at all.

pub mod classify;
pub mod config;
pub mod engine;
pub mod parser;
pub mod report;
pub mod reporter;
pub mod walk;

use serde::Serialize;
use std::path::PathBuf;

/// A single finding, anchored to the test declaration it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Location in the file
    pub location: Location,
}

/// Location in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// End line (optional)
    pub end_line: Option<usize>,
    /// End column (optional)
    pub end_column: Option<usize>,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            end_line: None,
            end_column: None,
        }
    }

    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }

    /// Location of a tree-sitter node, converted to 1-indexed positions.
    pub fn of_node(node: tree_sitter::Node) -> Self {
        Self::new(
            node.start_position().row + 1,
            node.start_position().column + 1,
        )
        .with_end(node.end_position().row + 1, node.end_position().column + 1)
    }
}

/// The result of checking one test file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Path to the checked file
    pub file_path: PathBuf,
    /// Diagnostics found, in tree order
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Public API: check a single test file with the given options.
pub fn check_file(
    path: &std::path::Path,
    options: &config::RuleOptions,
) -> anyhow::Result<FileReport> {
    use anyhow::Context;

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read test file: {}", path.display()))?;
    let mut parser = parser::JavaScriptParser::for_file(path)?;
    let tree = parser
        .parse(&source)
        .with_context(|| format!("Failed to parse test file: {}", path.display()))?;

    let rule = engine::AssertsLimitRule::new(options.clone());
    let diagnostics = rule.check(&tree, &source);

    Ok(FileReport {
        file_path: path.to_path_buf(),
        diagnostics,
    })
}
