//! # pysift
//!
//! Tree-sitter extraction of indexable Python code elements.
//!
//! Walks a repository for Python sources and produces a flat, ordered list
//! of typed code elements (whole files, classes, and functions/methods)
//! with reconstructed signatures, docstrings, import lists, and approximate
//! cyclomatic-complexity scores, ready to feed an indexing or embedding
//! pipeline. Per-file failures are isolated: a file that fails to read or
//! parse is skipped with a warning while the rest of the run continues.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pysift::{ExtractConfig, RepositoryExtractor, TracingReporter};
//!
//! let extractor = RepositoryExtractor::new(ExtractConfig::default());
//! let elements = extractor.extract_repository("path/to/repo".as_ref(), &TracingReporter)?;
//! for element in &elements {
//!     println!("{} {} ({}..{})", element.kind, element.name, element.start_line, element.end_line);
//! }
//! ```

pub mod error;
pub mod extractors;
pub mod filter;
pub mod language;
pub mod repository;

// Re-export commonly used types for convenience
pub use error::ExtractError;
pub use extractors::{CodeElement, ElementKind, PythonExtractor};
pub use filter::FileFilter;
pub use repository::{ExtractConfig, Reporter, RepositoryExtractor, TracingReporter};
