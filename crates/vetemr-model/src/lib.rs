pub mod error;
pub mod forms;
pub mod identity;
pub mod patient;
pub mod policy;
pub mod record;
mod wire;

pub use error::{Result, ValidationError};
pub use forms::{AdmissionForm, PatientDraft, RecordDraft, RecordForm, split_prescription};
pub use identity::{Identity, Role};
pub use patient::{Gender, Patient};
pub use record::MedicalRecord;
