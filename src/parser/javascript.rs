//! JavaScript/TypeScript parser using tree-sitter

use anyhow::{Context, Result};
use std::path::Path;
use tree_sitter::{Language, Parser, Tree};

/// Parser for JS/TS files using tree-sitter. The TypeScript grammar is a
/// superset of JavaScript, so plain .js test files parse with it too.
pub struct JavaScriptParser {
    parser: Parser,
}

impl JavaScriptParser {
    /// Create a parser with the TypeScript grammar
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into();
        parser
            .set_language(&language)
            .context("Failed to set TypeScript language")?;
        Ok(Self { parser })
    }

    /// Create a parser with the TSX grammar
    pub fn new_tsx() -> Result<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_typescript::LANGUAGE_TSX.into();
        parser
            .set_language(&language)
            .context("Failed to set TSX language")?;
        Ok(Self { parser })
    }

    /// Create a parser based on file extension
    pub fn for_file(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "tsx" | "jsx" => Self::new_tsx(),
            _ => Self::new(),
        }
    }

    /// Parse source code into a syntax tree
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .context("Failed to parse source")
    }
}
