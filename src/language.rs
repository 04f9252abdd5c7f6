//! Shared tree-sitter configuration for Python parsing.
//!
//! The engine consumes the grammar as a black box: source text in, navigable
//! tree out. A tree containing ERROR or MISSING nodes is rejected wholesale,
//! so a file either yields a fully parsed tree or a single `Syntax` error,
//! the all-or-nothing behavior of a batch `ast.parse`.

use tree_sitter::{Node, Parser, Tree};

use crate::error::ExtractError;

/// File extension handled by the engine.
pub const SOURCE_EXTENSION: &str = "py";

/// Tree-sitter language for Python.
pub fn python_language() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}

/// Parse Python source into a syntax tree.
pub fn parse_python(path: &str, source: &str) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(&python_language())
        .map_err(|e| ExtractError::Extraction {
            path: path.to_string(),
            message: format!("failed to load Python grammar: {}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::Extraction {
            path: path.to_string(),
            message: "parser returned no tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        let (line, column, message) = describe_first_error(root);
        return Err(ExtractError::Syntax {
            path: path.to_string(),
            line,
            column,
            message,
        });
    }

    Ok(tree)
}

/// Locate the first ERROR or MISSING node and describe it (1-based position).
fn describe_first_error(node: Node) -> (u32, u32, String) {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "invalid syntax".to_string()
        };
        return (pos.row as u32 + 1, pos.column as u32 + 1, message);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return describe_first_error(child);
        }
    }

    let pos = node.start_position();
    (
        pos.row as u32 + 1,
        pos.column as u32 + 1,
        "invalid syntax".to_string(),
    )
}
