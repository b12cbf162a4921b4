/*!
 * Local Filesystem Backend
 * Wraps std::fs for host filesystem access
 */

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::traits::FileSystem;
use super::types::*;

/// Local filesystem rooted at a host directory
#[derive(Debug, Clone)]
pub struct LocalFS {
    root: PathBuf,
    readonly: bool,
}

impl LocalFS {
    /// Create new local filesystem rooted at specified path
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            readonly: false,
        }
    }

    /// Create read-only local filesystem
    pub fn readonly<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            readonly: true,
        }
    }

    /// Resolve path relative to root
    ///
    /// `..` components that would climb above the root are dropped, so the
    /// result always stays under `root`.
    fn resolve(&self, path: &Path) -> PathBuf {
        let relative = path.strip_prefix("/").unwrap_or(path);
        let cleaned = path_clean::clean(Path::new("/").join(relative));

        let mut result = self.root.clone();
        for component in cleaned.components() {
            if let Component::Normal(name) = component {
                result.push(name);
            }
        }
        result
    }

    fn check_write(&self) -> VfsResult<()> {
        if self.readonly {
            return Err(VfsError::ReadOnly);
        }
        Ok(())
    }
}

impl FileSystem for LocalFS {
    fn read(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let full = self.resolve(path);
        if full.is_dir() {
            return Err(VfsError::IsADirectory(path.display().to_string()));
        }
        fs::read(&full).map_err(|e| VfsError::from_io(e, path.display().to_string()))
    }

    fn write(&self, path: &Path, data: &[u8]) -> VfsResult<()> {
        self.check_write()?;
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| VfsError::from_io(e, parent.display().to_string()))?;
        }
        fs::write(&full, data).map_err(|e| VfsError::from_io(e, path.display().to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn create_dir(&self, path: &Path) -> VfsResult<()> {
        self.check_write()?;
        let full = self.resolve(path);
        fs::create_dir_all(&full).map_err(|e| VfsError::from_io(e, path.display().to_string()))
    }

    fn name(&self) -> &'static str {
        "local"
    }

    fn readonly(&self) -> bool {
        self.readonly
    }
}
