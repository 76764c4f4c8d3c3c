//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use arcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ArcgenError, ArcgenResult},
};

/// Directories never searched for config markers.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> ArcgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ArcgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn touch(&self, path: &Path) -> ArcgenResult<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn read_to_string(&self, path: &Path) -> ArcgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn find_file(&self, root: &Path, name: &str) -> ArcgenResult<Option<PathBuf>> {
        let mut best: Option<(usize, PathBuf)> = None;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable subtrees are skipped, not fatal.
                    trace!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != name {
                continue;
            }

            let depth = entry.depth();
            if best.as_ref().is_none_or(|(best_depth, _)| depth < *best_depth) {
                best = Some((depth, entry.into_path()));
            }
        }

        if let Some((depth, path)) = &best {
            debug!(path = %path.display(), depth, "Found {}", name);
        }
        Ok(best.map(|(_, path)| path))
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ArcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
