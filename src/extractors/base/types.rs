// Element types shared by all extraction stages.

use serde::{Deserialize, Serialize};

/// Kind of extracted code element.
///
/// Methods are `Function` elements whose `name` carries the owning class as a
/// `<ClassName>.<methodName>` prefix; there is no separate method kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    File,
    Class,
    Function,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::File => write!(f, "file"),
            ElementKind::Class => write!(f, "class"),
            ElementKind::Function => write!(f, "function"),
        }
    }
}

/// One extracted, self-contained unit of source description.
///
/// Elements are siblings in a flat result list, not a nested structure: a
/// file's classes and functions share its `filepath`, and a method shares its
/// class's name prefix. Downstream consumers correlate by those fields alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeElement {
    pub kind: ElementKind,
    /// Identifier; `<ClassName>.<methodName>` for methods.
    pub name: String,
    /// Summarized text excerpt representing the element (see the per-kind
    /// synthesis rules in the extractor).
    pub content: String,
    /// Provenance path, as handed to the extractor.
    pub filepath: String,
    /// 1-based inclusive line span; `end_line >= start_line` always holds.
    pub start_line: u32,
    pub end_line: u32,
    /// Leading string-literal docstring, delimiters stripped.
    pub docstring: Option<String>,
    /// Formatted declaration line; present for classes and functions.
    pub signature: Option<String>,
    /// Approximate cyclomatic complexity; meaningful for functions, 1 elsewhere.
    pub complexity: u32,
    /// Import target names; non-empty only for file elements.
    pub imports: Vec<String>,
}
