//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use arcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ArcgenError, ArcgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and keep
/// another for assertions.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn check_writable(&self, path: &Path) -> ArcgenResult<()> {
        if self.read_only.contains(path) {
            return Err(fs_error(path, "Permission denied"));
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(fs_error(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dirs(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make writes to `path` fail (testing helper).
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Remove a file (testing helper).
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.remove(path.as_ref());
        }
    }

    /// All files with their content, sorted by path.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.read().map(|inner| inner.files.clone()).unwrap_or_default()
    }

    fn read(&self) -> ArcgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_error())
    }

    fn write(&self) -> ArcgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_error())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> ArcgenResult<()> {
        self.write()?.add_dirs(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ArcgenResult<()> {
        let mut inner = self.write()?;
        inner.check_writable(path)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn touch(&self, path: &Path) -> ArcgenResult<()> {
        let mut inner = self.write()?;
        if inner.files.contains_key(path) {
            return Ok(());
        }
        inner.check_writable(path)?;
        inner.files.insert(path.to_path_buf(), String::new());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ArcgenResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error(path, "No such file"))
    }

    fn find_file(&self, root: &Path, name: &str) -> ArcgenResult<Option<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| path.file_name().is_some_and(|file| file == name))
            .filter(|path| !path.components().any(|c| c.as_os_str() == "node_modules"))
            .min_by_key(|path| path.components().count())
            .cloned())
    }
}

fn fs_error(path: &Path, reason: &str) -> ArcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn lock_error() -> ArcgenError {
    ArcgenError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}
