/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::PatientId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export subsystem errors
pub use crate::config::ConfigError;
pub use crate::persistence::PersistenceError;
pub use crate::vfs::VfsError;

/// Record-level errors returned by the queue, store and registry
///
/// Every operation that fails with one of these leaves its table unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RecordError {
    #[error("Queue is full ({capacity} slots)")]
    #[diagnostic(
        code(queue::full),
        help("The waiting queue does not wrap around. Drain it completely or start a new session.")
    )]
    QueueFull { capacity: usize },

    #[error("Queue is empty")]
    #[diagnostic(code(queue::empty), help("Add a patient to the queue first."))]
    QueueEmpty,

    #[error("Patient store is full ({capacity} slots)")]
    #[diagnostic(
        code(patients::store_full),
        help("Every slot is occupied. Remove a patient before adding another.")
    )]
    StoreFull { capacity: usize },

    #[error("Patient {0} not found")]
    #[diagnostic(
        code(patients::not_found),
        help("The patient may have been removed or never existed. Check the ID.")
    )]
    NotFound(PatientId),

    #[error("Doctor registry is full ({capacity} slots)")]
    #[diagnostic(
        code(doctors::registry_full),
        help("Doctors cannot be removed; raise CLINIC_DOCTOR_CAPACITY and restart.")
    )]
    RegistryFull { capacity: usize },
}

/// Unified clinic error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum ClinicError {
    #[error("Record error: {0}")]
    #[diagnostic(transparent)]
    Record(#[from] RecordError),

    #[error("Persistence error: {0}")]
    #[diagnostic(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(clinic::io_error),
        help("Reading from or writing to the console failed.")
    )]
    Io(#[from] std::io::Error),
}

impl From<VfsError> for ClinicError {
    fn from(err: VfsError) -> Self {
        ClinicError::Persistence(PersistenceError::from(err))
    }
}
