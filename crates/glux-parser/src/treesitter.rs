//! Tree-sitter integration for Java parsing.

use glux_core::{GluxError, Result};
use std::path::Path;

/// Parse a Java source file and return the tree-sitter tree.
pub fn parse_java(path: &Path, source: &[u8]) -> Result<tree_sitter::Tree> {
    let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| GluxError::SourceScan(format!("failed to set tree-sitter language: {e}")))?;
    parser
        .parse(source, None)
        .ok_or_else(|| GluxError::SourceScan(format!("failed to parse {}", path.display())))
}
