/*!
 * System Limits and Constants
 *
 * Centralized location for table capacities and field bounds.
 * Values match the layout of the flat files written by earlier releases.
 */

// =============================================================================
// TABLE CAPACITIES
// =============================================================================

/// Patient store slots
pub const DEFAULT_PATIENT_CAPACITY: usize = 100;

/// Doctor registry slots
pub const DEFAULT_DOCTOR_CAPACITY: usize = 10;

/// Waiting queue slots
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

// =============================================================================
// FIELD BOUNDS (bytes, UTF-8)
// =============================================================================

/// Patient and doctor names
pub const MAX_NAME_LENGTH: usize = 49;

/// Patient disease and doctor specialty
pub const MAX_LABEL_LENGTH: usize = 49;

/// Free-text visit history
pub const MAX_VISIT_HISTORY_LENGTH: usize = 99;

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Default patient file name inside the data directory
pub const PATIENTS_FILE: &str = "patients.txt";

/// Default doctor file name inside the data directory
pub const DOCTORS_FILE: &str = "doctors.txt";

/// Default data directory when `CLINIC_DATA_DIR` is unset
pub const DEFAULT_DATA_DIR: &str = ".";

/// Field separator of the flat files
pub const FIELD_DELIMITER: char = ',';
