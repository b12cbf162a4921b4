/*!
 * Persistence
 *
 * Flat-file storage for the patient store and doctor registry. Files are
 * read once at startup and rewritten in full at shutdown. Loading re-hashes
 * every patient, so slot placement after a reload follows the hash function
 * rather than file order.
 */

mod adapter;
pub mod codec;

pub use adapter::{LoadReport, RecordFiles, SaveReport};

use crate::vfs::VfsError;
use miette::Diagnostic;
use thiserror::Error;

/// Persistence operation result
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persistence errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum PersistenceError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Vfs(#[from] VfsError),

    #[error("Record file {path} is not valid UTF-8")]
    #[diagnostic(
        code(persistence::invalid_utf8),
        help("The file was not written by this tool. Move it aside to start empty.")
    )]
    InvalidUtf8 { path: String },
}
