/*!
 * Core Types
 * Common types used across the record stores
 */

/// Patient identifier (hash key of the patient store)
pub type PatientId = u32;

/// Doctor identifier, `0` marks a vacant registry slot
pub type DoctorId = u32;

/// Slot index inside a fixed-capacity table
pub type SlotIndex = usize;

/// Patient age in years, signed like the legacy record files
pub type Age = i32;

/// Common result type for record operations
pub type RecordResult<T> = Result<T, super::errors::RecordError>;

/// Common result type for clinic-level operations
pub type ClinicResult<T> = Result<T, super::errors::ClinicError>;
