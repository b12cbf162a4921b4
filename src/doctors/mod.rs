/*!
 * Doctors
 * Doctor records and the append-only registry
 */

mod record;
mod registry;

pub use record::{DoctorName, DoctorRecord, Specialty};
pub use registry::DoctorRegistry;
