/*!
 * Clinic
 * Owns the patient store, doctor registry and assignment book for one process
 */

use crate::assignments::{legacy_roster, AssignmentBook, DoctorRoster};
use crate::config::ClinicConfig;
use crate::core::types::{DoctorId, PatientId, RecordResult, SlotIndex};
use crate::doctors::{DoctorRecord, DoctorRegistry};
use crate::patients::{PatientRecord, PatientStore};
use crate::persistence::{LoadReport, PersistenceResult, RecordFiles, SaveReport};
use crate::queue::VisitQueue;
use crate::vfs::FileSystem;
use tracing::info;

/// Record tables for a single session
///
/// Constructed once at startup and passed by reference to every operation.
///
/// # Example
///
/// ```
/// use clinic_records::{Clinic, ClinicConfig, PatientRecord};
///
/// let mut clinic = Clinic::new(ClinicConfig::default());
/// clinic.add_patient(PatientRecord::new(5, "Alice", 30, "Flu", "none")).unwrap();
/// assert_eq!(clinic.patients().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Clinic {
    config: ClinicConfig,
    patients: PatientStore,
    doctors: DoctorRegistry,
    assignments: AssignmentBook,
}

impl Clinic {
    pub fn new(config: ClinicConfig) -> Self {
        info!(
            patient_capacity = config.patient_capacity,
            doctor_capacity = config.doctor_capacity,
            queue_capacity = config.queue_capacity,
            "Initializing record tables"
        );
        Self {
            patients: PatientStore::new(config.patient_capacity),
            doctors: DoctorRegistry::new(config.doctor_capacity),
            assignments: AssignmentBook::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    pub fn patient_store(&self) -> &PatientStore {
        &self.patients
    }

    pub fn doctor_registry(&self) -> &DoctorRegistry {
        &self.doctors
    }

    pub fn assignment_book(&self) -> &AssignmentBook {
        &self.assignments
    }

    pub fn add_patient(&mut self, record: PatientRecord) -> RecordResult<SlotIndex> {
        let id = record.id;
        let slot = self.patients.insert(record)?;
        info!(patient_id = id, slot, "Patient added");
        Ok(slot)
    }

    /// Remove the first record stored under `id`
    ///
    /// The doctor assignment goes with the last record carrying that id.
    pub fn remove_patient(&mut self, id: PatientId) -> RecordResult<PatientRecord> {
        let record = self.patients.remove(id)?;
        if !self.patients.contains(id) {
            self.assignments.unassign(id);
        }
        info!(patient_id = id, "Patient removed");
        Ok(record)
    }

    pub fn patient(&self, id: PatientId) -> Option<&PatientRecord> {
        self.patients.get(id)
    }

    /// Stored patients in slot order
    pub fn patients(&self) -> Vec<&PatientRecord> {
        self.patients.list()
    }

    pub fn add_doctor(&mut self, record: DoctorRecord) -> RecordResult<SlotIndex> {
        let id = record.id;
        let slot = self.doctors.add(record)?;
        info!(doctor_id = id, slot, "Doctor added");
        Ok(slot)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&DoctorRecord> {
        self.doctors.get(id)
    }

    /// Registered doctors in slot order
    pub fn doctors(&self) -> Vec<&DoctorRecord> {
        self.doctors.list()
    }

    /// Record that `patient_id` is seen by `doctor_id`
    ///
    /// Returns the previously assigned doctor, if any.
    pub fn assign(&mut self, doctor_id: DoctorId, patient_id: PatientId) -> Option<DoctorId> {
        self.assignments.assign(doctor_id, patient_id)
    }

    /// Doctors with their explicitly assigned patients
    pub fn assignments(&self) -> Vec<DoctorRoster<'_>> {
        self.assignments.roster(&self.doctors, &self.patients)
    }

    /// Doctors with patients matched by slot arithmetic, as earlier releases listed them
    pub fn legacy_assignments(&self) -> Vec<DoctorRoster<'_>> {
        legacy_roster(&self.doctors, &self.patients)
    }

    /// Fresh waiting queue for a management session
    pub fn queue_session(&self) -> VisitQueue {
        VisitQueue::new(self.config.queue_capacity)
    }

    /// Record files on `fs` named by the configuration
    pub fn record_files<'a>(&self, fs: &'a dyn FileSystem) -> RecordFiles<'a> {
        RecordFiles::new(fs, &self.config.patients_file, &self.config.doctors_file)
    }

    pub fn load(&mut self, fs: &dyn FileSystem) -> PersistenceResult<LoadReport> {
        let files = self.record_files(fs);
        files.load(&mut self.patients, &mut self.doctors)
    }

    pub fn save(&self, fs: &dyn FileSystem) -> PersistenceResult<SaveReport> {
        self.record_files(fs).save(&self.patients, &self.doctors)
    }
}
