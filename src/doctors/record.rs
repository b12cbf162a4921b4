/*!
 * Doctor Record
 */

use crate::core::limits::{MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
use crate::core::types::DoctorId;
use crate::core::BoundedString;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type DoctorName = BoundedString<MAX_NAME_LENGTH>;
pub type Specialty = BoundedString<MAX_LABEL_LENGTH>;

/// One doctor, owned by its slot in the [`DoctorRegistry`](super::DoctorRegistry)
///
/// The default record (id `0`) marks a vacant slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: DoctorId,
    pub name: DoctorName,
    pub specialty: Specialty,
}

impl DoctorRecord {
    pub fn new(id: DoctorId, name: impl AsRef<str>, specialty: impl AsRef<str>) -> Self {
        Self {
            id,
            name: name.as_ref().into(),
            specialty: specialty.as_ref().into(),
        }
    }

    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.id == 0
    }
}

impl fmt::Display for DoctorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Specialty: {}",
            self.id, self.name, self.specialty
        )
    }
}
