use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One visit's clinical outcome on a patient's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub animal_id: String,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Ordered prescription items. Order and duplicates are preserved end to
    /// end; the client never sorts or dedupes medication lines.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub prescription: Vec<String>,
    /// Server-assigned creation time (ISO 8601 on the wire).
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub vet_name: Option<String>,
}

impl MedicalRecord {
    /// Attribution line, `Dr. Staff` when no vet is on the record.
    pub fn attending_label(&self) -> String {
        match self.vet_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => format!("Dr. {name}"),
            None => "Dr. Staff".to_owned(),
        }
    }

    /// Visit date rendered like `Mar 4, 2026`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}
