/*!
 * Doctor Assignments
 *
 * Explicit patient → doctor relation. Neither side is validated against
 * the store or registry, and the relation lives only for the session.
 *
 * `legacy_roster` reproduces the listing of earlier releases, which
 * matched a patient to the doctor in slot `i` when the patient ID was `i + 1`.
 */

use crate::core::types::{DoctorId, PatientId};
use crate::doctors::{DoctorRecord, DoctorRegistry};
use crate::patients::{PatientRecord, PatientStore};
use ahash::AHashMap;
use tracing::{debug, info};

/// One doctor with the patients attributed to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRoster<'a> {
    pub doctor: &'a DoctorRecord,
    pub patients: Vec<&'a PatientRecord>,
}

/// Patient → doctor mapping
#[derive(Debug, Clone, Default)]
pub struct AssignmentBook {
    by_patient: AHashMap<PatientId, DoctorId>,
}

impl AssignmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute `patient_id` to `doctor_id`
    ///
    /// Returns the doctor the patient was previously assigned to, if any.
    pub fn assign(&mut self, doctor_id: DoctorId, patient_id: PatientId) -> Option<DoctorId> {
        let previous = self.by_patient.insert(patient_id, doctor_id);
        info!(doctor_id, patient_id, ?previous, "Assigned patient to doctor");
        previous
    }

    pub fn unassign(&mut self, patient_id: PatientId) -> Option<DoctorId> {
        let previous = self.by_patient.remove(&patient_id);
        debug!(patient_id, ?previous, "Unassigned patient");
        previous
    }

    pub fn doctor_for(&self, patient_id: PatientId) -> Option<DoctorId> {
        self.by_patient.get(&patient_id).copied()
    }

    /// Patient IDs assigned to `doctor_id`, ascending
    pub fn patients_of(&self, doctor_id: DoctorId) -> Vec<PatientId> {
        let mut patients: Vec<_> = self
            .by_patient
            .iter()
            .filter(|&(_, &doctor)| doctor == doctor_id)
            .map(|(&patient, _)| patient)
            .collect();
        patients.sort_unstable();
        patients
    }

    pub fn len(&self) -> usize {
        self.by_patient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_patient.is_empty()
    }

    /// Every listed doctor with the stored patients assigned to them
    ///
    /// Patients appear in store slot order.
    pub fn roster<'a>(
        &self,
        registry: &'a DoctorRegistry,
        store: &'a PatientStore,
    ) -> Vec<DoctorRoster<'a>> {
        registry
            .iter()
            .map(|doctor| DoctorRoster {
                doctor,
                patients: store
                    .iter()
                    .filter(|patient| self.doctor_for(patient.id) == Some(doctor.id))
                    .collect(),
            })
            .collect()
    }
}

/// Listing by ID arithmetic: doctor in slot `i` gets patients with id `i + 1`
pub fn legacy_roster<'a>(
    registry: &'a DoctorRegistry,
    store: &'a PatientStore,
) -> Vec<DoctorRoster<'a>> {
    registry
        .iter_slots()
        .map(|(slot, doctor)| DoctorRoster {
            doctor,
            patients: store
                .iter()
                .filter(|patient| patient.id as usize == slot + 1)
                .collect(),
        })
        .collect()
}
