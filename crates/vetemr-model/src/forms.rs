//! Operator input to validated POST payloads.
//!
//! Builders here are pure functions over the raw form strings: trimming,
//! splitting, and validation all happen before anything can reach the
//! gateway, and a failed build never yields a partial draft.

use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::patient::Gender;

/// Payload for admitting a new patient (`POST /animals`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientDraft {
    pub name: String,
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub gender: Gender,
}

/// Payload for appending a medical record (`POST /records`).
///
/// A draft always carries the id of the patient it was built for and cannot
/// be pointed at a different timeline after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDraft {
    pub animal_id: String,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub prescription: Vec<String>,
}

/// Admission form fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct AdmissionForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub gender: Gender,
}

impl AdmissionForm {
    /// Validates the form and builds the admission payload.
    ///
    /// `name` and `species` are required after trimming; `age` and `weight`
    /// may be empty but must otherwise parse as non-negative numbers.
    pub fn build(&self) -> Result<PatientDraft> {
        Ok(PatientDraft {
            name: required(&self.name, "name")?,
            species: required(&self.species, "species")?,
            breed: optional(&self.breed),
            age: optional_number(&self.age, "age")?,
            weight: optional_number(&self.weight, "weight")?,
            gender: self.gender,
        })
    }
}

/// Record form fields, exactly as typed. The prescription arrives as one
/// comma-separated line.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub diagnosis: String,
    pub treatment: String,
    pub notes: String,
    pub prescription: String,
}

impl RecordForm {
    /// Validates the form and builds the record payload for the given
    /// patient's timeline.
    pub fn build(&self, animal_id: &str) -> Result<RecordDraft> {
        Ok(RecordDraft {
            animal_id: animal_id.to_owned(),
            diagnosis: required(&self.diagnosis, "diagnosis")?,
            treatment: required(&self.treatment, "treatment")?,
            notes: optional(&self.notes),
            prescription: split_prescription(&self.prescription),
        })
    }
}

/// Splits a comma-separated prescription line into medication items.
///
/// Items are trimmed and empties dropped; order and duplicates survive
/// exactly as authored. An all-whitespace line yields no items, which is a
/// valid prescription.
pub fn split_prescription(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_owned())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn optional_number(value: &str, field: &'static str) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(Some(number)),
        _ => Err(ValidationError::InvalidNumber { field }),
    }
}
