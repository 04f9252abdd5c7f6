//! File selection policy for repository scans.
//!
//! A candidate file is excluded when its base name contains `test` (any
//! case), when any path component equals a configured environment or cache
//! directory marker, or when its byte size exceeds the configured ceiling.
//! The predicate is pure apart from the size stat.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Default size ceiling for a single source file.
pub const DEFAULT_MAX_FILE_SIZE_KB: u64 = 500;

/// Default directory markers: bytecode caches and the usual
/// virtual-environment names.
pub fn default_skip_markers() -> Vec<String> {
    ["__pycache__", "venv", ".venv", "env"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub struct FileFilter {
    skip_markers: Vec<String>,
    max_file_size: u64,
}

impl FileFilter {
    pub fn new(skip_markers: Vec<String>, max_file_size_kb: u64) -> Self {
        Self {
            skip_markers,
            max_file_size: max_file_size_kb * 1024,
        }
    }

    /// True when the file must be excluded from extraction.
    pub fn should_skip(&self, path: &Path) -> bool {
        // Test files, by base name.
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.to_lowercase().contains("test") {
                debug!("skipping test file {}", path.display());
                return true;
            }
        }

        // Environment and cache directories, by exact path component. A
        // marker like "env" must not exclude files such as environment.py.
        for component in path.components() {
            if let std::path::Component::Normal(part) = component {
                if let Some(part) = part.to_str() {
                    if self.skip_markers.iter().any(|marker| marker == part) {
                        debug!("skipping {} (marker component {})", path.display(), part);
                        return true;
                    }
                }
            }
        }

        // Oversized files. A failed stat is not a skip; the read failure is
        // reported downstream instead.
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() > self.max_file_size {
                debug!(
                    "skipping {} ({} bytes over ceiling)",
                    path.display(),
                    metadata.len()
                );
                return true;
            }
        }

        false
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new(default_skip_markers(), DEFAULT_MAX_FILE_SIZE_KB)
    }
}
