/*!
 * Line Codec
 * Comma-delimited text lines for patient and doctor records
 *
 * Patient: `id,name,age,disease,visitHistory`
 * Doctor:  `id,name,specialty`
 *
 * There is no escaping. The last field of a line is read to end of line and
 * may contain commas; every other field may not. Encoding replaces offending
 * characters with a space so that a written line always decodes again.
 */

use crate::core::limits::FIELD_DELIMITER;
use crate::doctors::DoctorRecord;
use crate::patients::PatientRecord;
use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

const PATIENT_FIELDS: usize = 5;
const DOCTOR_FIELDS: usize = 3;

/// Why a line could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

fn inner_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            FIELD_DELIMITER | '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

fn last_field(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, DecodeError> {
    value.trim().parse().map_err(|_| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn split(line: &str, expected: usize) -> Result<Vec<&str>, DecodeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.splitn(expected, FIELD_DELIMITER).collect();
    if fields.len() != expected {
        return Err(DecodeError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Append one patient line, including the trailing newline
pub fn encode_patient(out: &mut String, record: &PatientRecord) {
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "{}{d}{}{d}{}{d}{}{d}{}",
        record.id,
        inner_field(&record.name),
        record.age,
        inner_field(&record.disease),
        last_field(&record.visit_history),
        d = FIELD_DELIMITER,
    );
}

/// Append one doctor line, including the trailing newline
pub fn encode_doctor(out: &mut String, record: &DoctorRecord) {
    let _ = writeln!(
        out,
        "{}{d}{}{d}{}",
        record.id,
        inner_field(&record.name),
        last_field(&record.specialty),
        d = FIELD_DELIMITER,
    );
}

/// Decode one patient line (without its newline)
pub fn decode_patient(line: &str) -> Result<PatientRecord, DecodeError> {
    let fields = split(line, PATIENT_FIELDS)?;
    Ok(PatientRecord::new(
        number("patient id", fields[0])?,
        fields[1],
        number("age", fields[2])?,
        fields[3],
        fields[4],
    ))
}

/// Decode one doctor line (without its newline)
pub fn decode_doctor(line: &str) -> Result<DoctorRecord, DecodeError> {
    let fields = split(line, DOCTOR_FIELDS)?;
    Ok(DoctorRecord::new(
        number("doctor id", fields[0])?,
        fields[1],
        fields[2],
    ))
}
