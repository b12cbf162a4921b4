/*!
 * Patient Record
 */

use crate::core::limits::{MAX_LABEL_LENGTH, MAX_NAME_LENGTH, MAX_VISIT_HISTORY_LENGTH};
use crate::core::types::{Age, PatientId};
use crate::core::BoundedString;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type PatientName = BoundedString<MAX_NAME_LENGTH>;
pub type Disease = BoundedString<MAX_LABEL_LENGTH>;
pub type VisitHistory = BoundedString<MAX_VISIT_HISTORY_LENGTH>;

/// One patient, owned by its slot in the [`PatientStore`](super::PatientStore)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: PatientId,
    pub name: PatientName,
    pub age: Age,
    pub disease: Disease,
    pub visit_history: VisitHistory,
}

impl PatientRecord {
    /// Build a record, truncating text fields to their bounds
    pub fn new(
        id: PatientId,
        name: impl AsRef<str>,
        age: Age,
        disease: impl AsRef<str>,
        visit_history: impl AsRef<str>,
    ) -> Self {
        Self {
            id,
            name: name.as_ref().into(),
            age,
            disease: disease.as_ref().into(),
            visit_history: visit_history.as_ref().into(),
        }
    }
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Disease: {}, Visit History: {}",
            self.id, self.name, self.age, self.disease, self.visit_history
        )
    }
}
