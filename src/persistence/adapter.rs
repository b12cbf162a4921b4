/*!
 * Record Files
 * Loads and saves the patient store and doctor registry as flat text files
 */

use super::codec::{decode_doctor, decode_patient, encode_doctor, encode_patient};
use super::{PersistenceError, PersistenceResult};
use crate::doctors::DoctorRegistry;
use crate::patients::PatientStore;
use crate::vfs::{FileSystem, VfsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub patients: usize,
    pub doctors: usize,
    /// 1-based line where patient loading stopped early
    pub patients_stopped_at: Option<usize>,
    /// 1-based line where doctor loading stopped early
    pub doctors_stopped_at: Option<usize>,
}

/// Outcome of a save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    pub patients: usize,
    pub doctors: usize,
}

/// The two record files on a [`FileSystem`]
pub struct RecordFiles<'a> {
    fs: &'a dyn FileSystem,
    patients_path: PathBuf,
    doctors_path: PathBuf,
}

impl<'a> RecordFiles<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        patients_path: impl Into<PathBuf>,
        doctors_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            patients_path: patients_path.into(),
            doctors_path: doctors_path.into(),
        }
    }

    /// Read a file as text; `None` when it does not exist
    fn read_text(&self, path: &Path) -> PersistenceResult<Option<String>> {
        let bytes = match self.fs.read(path) {
            Ok(bytes) => bytes,
            Err(VfsError::NotFound(_)) => {
                info!(path = %path.display(), fs = self.fs.name(), "Record file missing, nothing to load");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| PersistenceError::InvalidUtf8 {
                path: path.display().to_string(),
            })
    }

    /// Load both files
    pub fn load(
        &self,
        store: &mut PatientStore,
        registry: &mut DoctorRegistry,
    ) -> PersistenceResult<LoadReport> {
        let mut report = LoadReport::default();
        (report.patients, report.patients_stopped_at) = self.load_patients(store)?;
        (report.doctors, report.doctors_stopped_at) = self.load_doctors(registry)?;

        info!(
            patients = report.patients,
            doctors = report.doctors,
            "Records loaded"
        );
        Ok(report)
    }

    /// Insert every patient line into `store`, re-hashing each record
    ///
    /// Returns the number loaded and the line that stopped loading early, if any.
    pub fn load_patients(
        &self,
        store: &mut PatientStore,
    ) -> PersistenceResult<(usize, Option<usize>)> {
        let Some(text) = self.read_text(&self.patients_path)? else {
            return Ok((0, None));
        };

        let mut loaded = 0;
        for (number, line) in numbered_lines(&text) {
            let record = match decode_patient(line) {
                Ok(record) => record,
                Err(e) => {
                    warn!(line = number, error = %e, "Malformed patient row, stopping load");
                    return Ok((loaded, Some(number)));
                }
            };
            if let Err(e) = store.insert(record) {
                warn!(line = number, error = %e, "Patient store full, stopping load");
                return Ok((loaded, Some(number)));
            }
            loaded += 1;
        }

        debug!(loaded, path = %self.patients_path.display(), "Patients loaded");
        Ok((loaded, None))
    }

    /// Add every doctor line to `registry`, skipping rows with id 0
    pub fn load_doctors(
        &self,
        registry: &mut DoctorRegistry,
    ) -> PersistenceResult<(usize, Option<usize>)> {
        let Some(text) = self.read_text(&self.doctors_path)? else {
            return Ok((0, None));
        };

        let mut loaded = 0;
        for (number, line) in numbered_lines(&text) {
            let record = match decode_doctor(line) {
                Ok(record) => record,
                Err(e) => {
                    warn!(line = number, error = %e, "Malformed doctor row, stopping load");
                    return Ok((loaded, Some(number)));
                }
            };
            if record.is_vacant() {
                debug!(line = number, "Skipping doctor row with id 0");
                continue;
            }
            if let Err(e) = registry.add(record) {
                warn!(line = number, error = %e, "Doctor registry full, stopping load");
                return Ok((loaded, Some(number)));
            }
            loaded += 1;
        }

        debug!(loaded, path = %self.doctors_path.display(), "Doctors loaded");
        Ok((loaded, None))
    }

    /// Overwrite both files with the current contents
    pub fn save(
        &self,
        store: &PatientStore,
        registry: &DoctorRegistry,
    ) -> PersistenceResult<SaveReport> {
        let mut report = SaveReport::default();

        let mut patients = String::new();
        for record in store.iter() {
            encode_patient(&mut patients, record);
            report.patients += 1;
        }
        self.fs.write(&self.patients_path, patients.as_bytes())?;

        let mut doctors = String::new();
        for record in registry.iter() {
            encode_doctor(&mut doctors, record);
            report.doctors += 1;
        }
        self.fs.write(&self.doctors_path, doctors.as_bytes())?;

        info!(
            patients = report.patients,
            doctors = report.doctors,
            fs = self.fs.name(),
            "Records saved"
        );
        Ok(report)
    }
}

/// Non-blank lines with their 1-based line numbers
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
