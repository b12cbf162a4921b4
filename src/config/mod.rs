/*!
 * Clinic Configuration
 *
 * Table capacities and record file locations. Defaults match the flat
 * files of earlier releases; environment variables override them:
 *
 * - `CLINIC_DATA_DIR`: directory holding the record files (default: `.`)
 * - `CLINIC_PATIENT_CAPACITY`: patient store slots (default: 100)
 * - `CLINIC_DOCTOR_CAPACITY`: doctor registry slots (default: 10)
 * - `CLINIC_QUEUE_CAPACITY`: waiting queue slots (default: 100)
 */

use crate::core::limits::{
    DEFAULT_DATA_DIR, DEFAULT_DOCTOR_CAPACITY, DEFAULT_PATIENT_CAPACITY, DEFAULT_QUEUE_CAPACITY,
    DOCTORS_FILE, PATIENTS_FILE,
};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_DATA_DIR: &str = "CLINIC_DATA_DIR";
pub const ENV_PATIENT_CAPACITY: &str = "CLINIC_PATIENT_CAPACITY";
pub const ENV_DOCTOR_CAPACITY: &str = "CLINIC_DOCTOR_CAPACITY";
pub const ENV_QUEUE_CAPACITY: &str = "CLINIC_QUEUE_CAPACITY";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    #[diagnostic(code(config::invalid_number), help("Unset the variable to use the default."))]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be at least 1")]
    #[diagnostic(code(config::zero_capacity), help("A table needs at least one slot."))]
    ZeroCapacity { var: &'static str },
}

/// Clinic configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Directory holding the record files
    pub data_dir: PathBuf,

    /// Patient store slots (default: 100)
    pub patient_capacity: usize,

    /// Doctor registry slots (default: 10)
    pub doctor_capacity: usize,

    /// Waiting queue slots (default: 100)
    pub queue_capacity: usize,

    /// Patient file name inside `data_dir`
    pub patients_file: PathBuf,

    /// Doctor file name inside `data_dir`
    pub doctors_file: PathBuf,
}

impl ClinicConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            patient_capacity: DEFAULT_PATIENT_CAPACITY,
            doctor_capacity: DEFAULT_DOCTOR_CAPACITY,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            patients_file: PathBuf::from(PATIENTS_FILE),
            doctors_file: PathBuf::from(DOCTORS_FILE),
        }
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(n) = capacity(&lookup, ENV_PATIENT_CAPACITY)? {
            config.patient_capacity = n;
        }
        if let Some(n) = capacity(&lookup, ENV_DOCTOR_CAPACITY)? {
            config.doctor_capacity = n;
        }
        if let Some(n) = capacity(&lookup, ENV_QUEUE_CAPACITY)? {
            config.queue_capacity = n;
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_patient_capacity(mut self, capacity: usize) -> Self {
        self.patient_capacity = capacity;
        self
    }

    pub fn with_doctor_capacity(mut self, capacity: usize) -> Self {
        self.doctor_capacity = capacity;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn capacity<F>(lookup: &F, var: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value: value.clone() })?;
    if n == 0 {
        return Err(ConfigError::ZeroCapacity { var });
    }
    Ok(Some(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.patient_capacity, 100);
        assert_eq!(config.doctor_capacity, 10);
        assert_eq!(config.patients_file, PathBuf::from("patients.txt"));
    }

    #[test]
    fn test_overrides() {
        let config = ClinicConfig::from_vars(vars(&[
            (ENV_DATA_DIR, "/var/lib/clinic"),
            (ENV_PATIENT_CAPACITY, " 250 "),
            (ENV_QUEUE_CAPACITY, "5"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/clinic"));
        assert_eq!(config.patient_capacity, 250);
        assert_eq!(config.doctor_capacity, 10);
        assert_eq!(config.queue_capacity, 5);
    }

    #[test]
    fn test_invalid_number() {
        let err = ClinicConfig::from_vars(vars(&[(ENV_DOCTOR_CAPACITY, "ten")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: ENV_DOCTOR_CAPACITY,
                value: "ten".into()
            }
        );
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = ClinicConfig::from_vars(vars(&[(ENV_PATIENT_CAPACITY, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCapacity { var: ENV_PATIENT_CAPACITY });
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClinicConfig = serde_json::from_str(r#"{"doctor_capacity": 3}"#).unwrap();
        assert_eq!(config.doctor_capacity, 3);
        assert_eq!(config.patient_capacity, 100);
    }
}
