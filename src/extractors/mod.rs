//! Tree-sitter based element extraction.
//!
//! The module is organized into two sub-modules:
//! - `base` - shared data model and per-file source context
//! - `python` - the Python element extractor and its helpers

pub mod base;
pub mod python;

// Re-export the public API
pub use base::{CodeElement, ElementKind, SourceContext};
pub use python::PythonExtractor;
