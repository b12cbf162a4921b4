/*!
 * In-Memory Filesystem Backend
 * Fast, volatile filesystem for testing and temporary storage
 */

use dashmap::{DashMap, DashSet};
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::traits::FileSystem;
use super::types::*;

/// In-memory filesystem
///
/// Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemFS {
    files: Arc<DashMap<PathBuf, Vec<u8>>>,
    dirs: Arc<DashSet<PathBuf>>,
    max_size: Option<usize>,
    current_size: Arc<AtomicUsize>,
}

impl MemFS {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with size limit
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..Self::default()
        }
    }

    /// Bytes currently stored
    pub fn used(&self) -> usize {
        self.current_size.load(Ordering::Acquire)
    }

    /// Normalize path (make absolute and clean)
    fn normalize(&self, path: &Path) -> PathBuf {
        let mut result = PathBuf::from("/");
        for comp in path_clean::clean(Path::new("/").join(path)).components() {
            if let Component::Normal(c) = comp {
                result.push(c);
            }
        }
        result
    }
}

impl FileSystem for MemFS {
    fn read(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let path = self.normalize(path);
        if self.dirs.contains(&path) {
            return Err(VfsError::IsADirectory(path.display().to_string()));
        }
        self.files
            .get(&path)
            .map(|data| data.value().clone())
            .ok_or_else(|| VfsError::NotFound(path.display().to_string()))
    }

    fn write(&self, path: &Path, data: &[u8]) -> VfsResult<()> {
        let path = self.normalize(path);
        if self.dirs.contains(&path) {
            return Err(VfsError::IsADirectory(path.display().to_string()));
        }

        let old_size = self.files.get(&path).map(|d| d.len()).unwrap_or(0);
        if let Some(max) = self.max_size {
            let projected = self.used() - old_size + data.len();
            if projected > max {
                return Err(VfsError::OutOfSpace);
            }
        }

        self.files.insert(path, data.to_vec());
        self.current_size.fetch_sub(old_size, Ordering::AcqRel);
        self.current_size.fetch_add(data.len(), Ordering::AcqRel);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize(path);
        path == Path::new("/") || self.files.contains_key(&path) || self.dirs.contains(&path)
    }

    fn create_dir(&self, path: &Path) -> VfsResult<()> {
        let path = self.normalize(path);
        let mut current = PathBuf::from("/");
        for component in path.components().skip(1) {
            current.push(component);
            self.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read() {
        let fs = MemFS::new();
        fs.write(Path::new("/patients.txt"), b"1,A,2,B,C\n").unwrap();
        assert_eq!(fs.read(Path::new("patients.txt")).unwrap(), b"1,A,2,B,C\n");
        assert!(fs.exists(Path::new("/patients.txt")));
        assert!(!fs.exists(Path::new("/doctors.txt")));
    }

    #[test]
    fn test_missing_file() {
        let fs = MemFS::new();
        assert!(matches!(fs.read(Path::new("/nope")), Err(VfsError::NotFound(_))));
    }

    #[test]
    fn test_capacity_tracks_overwrites() {
        let fs = MemFS::with_capacity(10);
        fs.write(Path::new("/a"), b"12345678").unwrap();
        fs.write(Path::new("/a"), b"1234567890").unwrap();
        assert_eq!(fs.used(), 10);
        assert_eq!(fs.write(Path::new("/b"), b"x"), Err(VfsError::OutOfSpace));
    }

    #[test]
    fn test_clones_share_contents() {
        let fs = MemFS::new();
        let other = fs.clone();
        fs.write(Path::new("/x"), b"1").unwrap();
        assert_eq!(other.read(Path::new("/x")).unwrap(), b"1");
    }

    #[test]
    fn test_create_dir() {
        let fs = MemFS::new();
        fs.create_dir(Path::new("/data/clinic")).unwrap();
        assert!(fs.exists(Path::new("/data")));
        assert!(fs.exists(Path::new("/data/clinic")));
        assert!(matches!(fs.read(Path::new("/data")), Err(VfsError::IsADirectory(_))));
    }
}
