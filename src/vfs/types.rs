/*!
 * VFS Types
 * Shared types for filesystem operations
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// VFS operation result
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
pub enum VfsError {
    #[error("Not found: {0}")]
    #[diagnostic(code(vfs::not_found))]
    NotFound(String),

    #[error("Permission denied: {0}")]
    #[diagnostic(code(vfs::permission_denied), help("Check the data directory permissions."))]
    PermissionDenied(String),

    #[error("Is a directory: {0}")]
    #[diagnostic(code(vfs::is_a_directory))]
    IsADirectory(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(vfs::io_error))]
    IoError(String),

    #[error("Out of space")]
    #[diagnostic(code(vfs::out_of_space))]
    OutOfSpace,

    #[error("Read-only filesystem")]
    #[diagnostic(code(vfs::read_only))]
    ReadOnly,
}

impl VfsError {
    /// Convert std::io::Error to VfsError
    pub fn from_io(e: std::io::Error, context: impl Into<String>) -> Self {
        use std::io::ErrorKind;
        match e.kind() {
            ErrorKind::NotFound => VfsError::NotFound(context.into()),
            ErrorKind::PermissionDenied => VfsError::PermissionDenied(context.into()),
            _ => VfsError::IoError(format!("{}: {}", context.into(), e)),
        }
    }
}
