/*!
 * Patients
 * Patient records and the hash-addressed patient store
 */

mod record;
mod store;

pub use record::{Disease, PatientName, PatientRecord, VisitHistory};
pub use store::{PatientStore, Slot, StoreStats};
