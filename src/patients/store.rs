/*!
 * Patient Store
 * Fixed-size open-addressing hash table with linear probing
 *
 * Slots move from `Empty` to `Occupied` on insert and from `Occupied` to
 * `Removed` on remove. `Removed` is a tombstone: lookups probe past it so a
 * collided record placed further along the chain stays reachable, while
 * inserts may reuse it. Tombstones keep the stale record until overwritten.
 */

use super::record::PatientRecord;
use crate::core::errors::RecordError;
use crate::core::types::{PatientId, RecordResult, SlotIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// State of one table slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Never written
    Empty,
    Occupied(PatientRecord),
    /// Tombstone holding the last record written here
    Removed(PatientRecord),
}

impl Slot {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Record visible through this slot, if any
    #[inline]
    pub fn record(&self) -> Option<&PatientRecord> {
        match self {
            Slot::Occupied(record) => Some(record),
            _ => None,
        }
    }
}

/// Slot usage snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub capacity: usize,
    pub occupied: usize,
    pub tombstones: usize,
    pub empty: usize,
    pub load_factor: f64,
}

/// Patient table keyed by [`PatientId`]
///
/// # Example
///
/// ```
/// use clinic_records::patients::{PatientRecord, PatientStore};
///
/// let mut store = PatientStore::new(100);
/// let slot = store.insert(PatientRecord::new(5, "Alice", 30, "Flu", "none")).unwrap();
/// assert_eq!(slot, 5);
///
/// let collided = store.insert(PatientRecord::new(105, "Bob", 41, "Cold", "none")).unwrap();
/// assert_eq!(collided, 6);
///
/// store.remove(105).unwrap();
/// assert!(store.get(5).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PatientStore {
    slots: Box<[Slot]>,
    occupied: usize,
}

impl PatientStore {
    /// Create a store with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
            occupied: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slot count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    /// Home slot of `id`, or `None` for a zero-capacity store
    #[inline]
    pub fn home_index(&self, id: PatientId) -> Option<SlotIndex> {
        match self.capacity() {
            0 => None,
            n => Some(id as usize % n),
        }
    }

    /// Slot indices visited when probing for `id`, home slot first
    fn probe(&self, id: PatientId) -> impl Iterator<Item = SlotIndex> {
        let n = self.capacity();
        let home = self.home_index(id).unwrap_or(0);
        (0..n).map(move |step| (home + step) % n)
    }

    /// Raw slot access
    pub fn slot(&self, index: SlotIndex) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Insert a record into the first free slot of its probe sequence
    ///
    /// Returns the slot index written. An existing record with the same ID is
    /// left untouched; the new record takes a later slot in the chain.
    pub fn insert(&mut self, record: PatientRecord) -> RecordResult<SlotIndex> {
        let id = record.id;
        let free = self
            .probe(id)
            .find(|&index| !self.slots[index].is_occupied());

        let Some(index) = free else {
            warn!(patient_id = id, capacity = self.capacity(), "Patient store full");
            return Err(RecordError::StoreFull {
                capacity: self.capacity(),
            });
        };

        if self.get(id).is_some() {
            debug!(patient_id = id, "Inserting duplicate patient ID");
        }

        self.slots[index] = Slot::Occupied(record);
        self.occupied += 1;

        debug!(
            patient_id = id,
            slot = index,
            home = self.home_index(id),
            occupied = self.occupied,
            "Patient inserted"
        );
        Ok(index)
    }

    /// Slot holding the first occupied record with `id` in probe order
    ///
    /// Probing stops at a never-used slot; tombstones are stepped over.
    pub fn slot_of(&self, id: PatientId) -> Option<SlotIndex> {
        for index in self.probe(id) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(record) if record.id == id => return Some(index),
                _ => {}
            }
        }
        None
    }

    /// Look up a patient by ID
    pub fn get(&self, id: PatientId) -> Option<&PatientRecord> {
        self.slot_of(id).and_then(|index| self.slots[index].record())
    }

    #[inline]
    pub fn contains(&self, id: PatientId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Remove a patient, leaving a tombstone in its slot
    ///
    /// Returns the removed record.
    pub fn remove(&mut self, id: PatientId) -> RecordResult<PatientRecord> {
        let index = self.slot_of(id).ok_or(RecordError::NotFound(id))?;

        let slot = std::mem::replace(&mut self.slots[index], Slot::Empty);
        let record = match slot {
            Slot::Occupied(record) => record,
            other => {
                self.slots[index] = other;
                return Err(RecordError::NotFound(id));
            }
        };
        self.slots[index] = Slot::Removed(record.clone());
        self.occupied -= 1;

        debug!(patient_id = id, slot = index, occupied = self.occupied, "Patient removed");
        Ok(record)
    }

    /// Occupied records in slot order
    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> + '_ {
        self.slots.iter().filter_map(Slot::record)
    }

    /// Occupied records paired with their slot index
    pub fn iter_slots(&self) -> impl Iterator<Item = (SlotIndex, &PatientRecord)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.record().map(|record| (index, record)))
    }

    /// Snapshot of every occupied record, in slot order
    pub fn list(&self) -> Vec<&PatientRecord> {
        self.iter().collect()
    }

    pub fn stats(&self) -> StoreStats {
        let tombstones = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Removed(_)))
            .count();
        let capacity = self.capacity();
        StoreStats {
            capacity,
            occupied: self.occupied,
            tombstones,
            empty: capacity - self.occupied - tombstones,
            load_factor: if capacity == 0 {
                0.0
            } else {
                self.occupied as f64 / capacity as f64
            },
        }
    }
}
