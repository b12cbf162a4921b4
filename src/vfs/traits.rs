/*!
 * VFS Traits
 * Filesystem abstraction used by the persistence adapter
 */

use std::path::Path;

use super::types::VfsResult;

/// Virtual filesystem trait
///
/// Whole-file reads and writes only; the record files are small and are
/// always rewritten in full.
pub trait FileSystem: Send + Sync {
    /// Read entire file contents
    fn read(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Write entire file contents (create or overwrite)
    fn write(&self, path: &Path, data: &[u8]) -> VfsResult<()>;

    /// Check if file/directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory (including parents)
    fn create_dir(&self, path: &Path) -> VfsResult<()>;

    /// Get filesystem name/type
    fn name(&self) -> &'static str;

    /// Check if filesystem is read-only
    fn readonly(&self) -> bool {
        false
    }
}
