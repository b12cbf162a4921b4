/*!
 * Clinic Records Library
 * Fixed-capacity patient and doctor tables with flat-file persistence
 */

pub mod assignments;
pub mod clinic;
pub mod config;
pub mod console;
pub mod core;
pub mod doctors;
pub mod monitoring;
pub mod patients;
pub mod persistence;
pub mod queue;
pub mod vfs;

// Re-exports
pub use assignments::{AssignmentBook, DoctorRoster};
pub use clinic::Clinic;
pub use config::{ClinicConfig, ConfigError};
pub use console::Console;
pub use self::core::{ClinicError, ClinicResult, DoctorId, PatientId, RecordError, RecordResult};
pub use doctors::{DoctorRecord, DoctorRegistry};
pub use monitoring::init_tracing;
pub use patients::{PatientRecord, PatientStore};
pub use persistence::{LoadReport, PersistenceError, RecordFiles, SaveReport};
pub use queue::VisitQueue;
pub use vfs::{FileSystem, LocalFS, MemFS, VfsError};
