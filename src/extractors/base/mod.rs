// Shared extraction foundation.
//
// - types.rs: the emitted data model (CodeElement, ElementKind)
// - context.rs: per-file source context with O(1) line-span slicing

pub mod context;
pub mod types;

pub use context::{LineIndex, SourceContext};
pub use types::{CodeElement, ElementKind};
