/*!
 * Doctor Registry
 * Fixed-size slot array with first-fit insert
 */

use super::record::DoctorRecord;
use crate::core::errors::RecordError;
use crate::core::types::{DoctorId, RecordResult, SlotIndex};
use tracing::{debug, warn};

/// Append-only doctor table
///
/// A slot whose record has id `0` is vacant. Doctors are never removed.
#[derive(Debug, Clone)]
pub struct DoctorRegistry {
    slots: Box<[DoctorRecord]>,
}

impl DoctorRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![DoctorRecord::default(); capacity].into_boxed_slice(),
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-vacant slots
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Write `record` into the first vacant slot
    ///
    /// A record with id `0` is written but leaves its slot vacant.
    pub fn add(&mut self, record: DoctorRecord) -> RecordResult<SlotIndex> {
        let Some(index) = self.slots.iter().position(DoctorRecord::is_vacant) else {
            warn!(doctor_id = record.id, capacity = self.capacity(), "Doctor registry full");
            return Err(RecordError::RegistryFull {
                capacity: self.capacity(),
            });
        };

        if record.id == 0 {
            warn!(slot = index, "Doctor added with id 0, slot stays vacant");
        }

        debug!(doctor_id = record.id, slot = index, "Doctor added");
        self.slots[index] = record;
        Ok(index)
    }

    /// First doctor with `id` in slot order
    pub fn get(&self, id: DoctorId) -> Option<&DoctorRecord> {
        if id == 0 {
            return None;
        }
        self.slots.iter().find(|doctor| doctor.id == id)
    }

    /// Doctors in slot order
    pub fn iter(&self) -> impl Iterator<Item = &DoctorRecord> + '_ {
        self.slots.iter().filter(|doctor| !doctor.is_vacant())
    }

    /// Doctors paired with their slot index
    pub fn iter_slots(&self) -> impl Iterator<Item = (SlotIndex, &DoctorRecord)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, doctor)| !doctor.is_vacant())
    }

    pub fn list(&self) -> Vec<&DoctorRecord> {
        self.iter().collect()
    }
}
