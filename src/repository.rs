//! Repository-wide orchestration.
//!
//! Walks a directory tree for Python sources, applies the file filter, and
//! runs parse + extraction per file, accumulating one ordered element list
//! across the traversal. Per-file failures are isolated: they go to the
//! injected reporter and the file contributes zero elements. Processing is
//! strictly sequential; each file's extraction depends only on its own text
//! and the static configuration, so a future parallel implementation would
//! have to re-join results in traversal order rather than reorder output.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::extractors::base::CodeElement;
use crate::extractors::python::PythonExtractor;
use crate::filter::{default_skip_markers, FileFilter, DEFAULT_MAX_FILE_SIZE_KB};
use crate::language::{parse_python, SOURCE_EXTENSION};

/// Static configuration for a repository scan.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Size ceiling for a single file, in KiB.
    pub max_file_size_kb: u64,
    /// Directory names excluded by exact path-component match.
    pub skip_markers: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_file_size_kb: DEFAULT_MAX_FILE_SIZE_KB,
            skip_markers: default_skip_markers(),
        }
    }
}

/// Injected reporting collaborator, so the core stays independent of any
/// ambient logging configuration.
pub trait Reporter {
    /// A file was dropped from the run with a recoverable error.
    fn file_skipped(&self, path: &Path, error: &ExtractError);
    /// The traversal finished; `element_count` elements were emitted.
    fn finished(&self, element_count: usize);
}

/// Default reporter: forwards to the `tracing` macros.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn file_skipped(&self, path: &Path, error: &ExtractError) {
        warn!("failed to extract {}: {}", path.display(), error);
    }

    fn finished(&self, element_count: usize) {
        info!("extracted {} code elements", element_count);
    }
}

/// Sequences file selection, parsing, and element extraction over a
/// directory tree. Holds no state across files; re-running over unchanged
/// sources yields an identical list.
pub struct RepositoryExtractor {
    filter: FileFilter,
}

impl RepositoryExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            filter: FileFilter::new(config.skip_markers, config.max_file_size_kb),
        }
    }

    /// Extract every eligible `.py` file under `root`, in traversal order.
    ///
    /// An invalid root is fatal; everything after that point is recoverable
    /// per file and reported through `reporter`.
    pub fn extract_repository(
        &self,
        root: &Path,
        reporter: &dyn Reporter,
    ) -> anyhow::Result<Vec<CodeElement>> {
        if !root.is_dir() {
            return Err(ExtractError::InvalidRoot {
                path: root.to_path_buf(),
            }
            .into());
        }

        // The root is a literal path; escape it so directories named with
        // glob metacharacters (e.g. "data[1]") still scan correctly.
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        let pattern = Path::new(&escaped_root)
            .join("**")
            .join(format!("*.{}", SOURCE_EXTENSION))
            .to_string_lossy()
            .into_owned();
        let entries = glob::glob(&pattern)
            .with_context(|| format!("invalid scan pattern {}", pattern))?;

        let mut elements = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => {
                    if self.filter.should_skip(&path) {
                        continue;
                    }
                    match self.extract_file(&path) {
                        Ok(file_elements) => elements.extend(file_elements),
                        Err(error) => reporter.file_skipped(&path, &error),
                    }
                }
                Err(error) => {
                    let path = error.path().to_path_buf();
                    let read_error = ExtractError::Read {
                        path: path.display().to_string(),
                        source: error.into(),
                    };
                    reporter.file_skipped(&path, &read_error);
                }
            }
        }

        reporter.finished(elements.len());
        Ok(elements)
    }

    /// Extract the element list for a single file on disk. All-or-nothing:
    /// a failure yields no partial elements.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<CodeElement>, ExtractError> {
        let filepath = path.to_string_lossy().into_owned();
        let source = fs::read_to_string(path).map_err(|e| ExtractError::Read {
            path: filepath.clone(),
            source: e,
        })?;
        self.extract_source(&filepath, source)
    }

    /// Extract from already-loaded source text.
    pub fn extract_source(
        &self,
        filepath: &str,
        source: String,
    ) -> Result<Vec<CodeElement>, ExtractError> {
        let tree = parse_python(filepath, &source)?;
        let extractor = PythonExtractor::new(filepath.to_string(), source);
        Ok(extractor.extract_elements(&tree))
    }
}

impl Default for RepositoryExtractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}
