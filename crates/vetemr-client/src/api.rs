//! Service contracts the view layer is written against.
//!
//! [`HttpGateway`](crate::gateway::HttpGateway) is the production
//! implementation of both traits; view tests drive them with in-memory
//! fakes. Methods return explicit `Send` futures so implementations can be
//! handed to any executor.

use std::future::Future;

use serde::{Deserialize, Serialize};

use vetemr_model::{Identity, MedicalRecord, Patient, PatientDraft, RecordDraft};

use crate::error::{AuthError, Result};

/// Sign-in form payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Staff email address.
    pub email: String,
    /// Plaintext password; never logged, never stored.
    pub password: String,
}

/// A successful authentication.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthGrant {
    /// Who signed in.
    pub identity: Identity,
    /// Bearer token for subsequent requests. Absent on deployments that ride
    /// on cookie sessions; requests then simply carry no `Authorization`.
    #[serde(default)]
    pub token: Option<String>,
}

/// Authentication contract.
pub trait AuthApi {
    /// Exchanges credentials for an [`AuthGrant`].
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = std::result::Result<AuthGrant, AuthError>> + Send;
}

/// Records-service contract: the five operations the views are built from.
pub trait RecordsApi {
    /// Fetches the full patient roster.
    fn list_patients(&self) -> impl Future<Output = Result<Vec<Patient>>> + Send;

    /// Fetches one patient by id.
    fn get_patient(&self, id: &str) -> impl Future<Output = Result<Patient>> + Send;

    /// Fetches one patient's medical history, in the order the service
    /// returns it.
    fn list_records(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<Vec<MedicalRecord>>> + Send;

    /// Admits a new patient and returns the stored row.
    fn create_patient(&self, draft: &PatientDraft)
    -> impl Future<Output = Result<Patient>> + Send;

    /// Appends a medical record and returns the stored row.
    fn create_record(
        &self,
        draft: &RecordDraft,
    ) -> impl Future<Output = Result<MedicalRecord>> + Send;
}

impl<T: RecordsApi> RecordsApi for &T {
    fn list_patients(&self) -> impl Future<Output = Result<Vec<Patient>>> + Send {
        (**self).list_patients()
    }

    fn get_patient(&self, id: &str) -> impl Future<Output = Result<Patient>> + Send {
        (**self).get_patient(id)
    }

    fn list_records(
        &self,
        animal_id: &str,
    ) -> impl Future<Output = Result<Vec<MedicalRecord>>> + Send {
        (**self).list_records(animal_id)
    }

    fn create_patient(
        &self,
        draft: &PatientDraft,
    ) -> impl Future<Output = Result<Patient>> + Send {
        (**self).create_patient(draft)
    }

    fn create_record(
        &self,
        draft: &RecordDraft,
    ) -> impl Future<Output = Result<MedicalRecord>> + Send {
        (**self).create_record(draft)
    }
}

impl<T: AuthApi> AuthApi for &T {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = std::result::Result<AuthGrant, AuthError>> + Send {
        (**self).authenticate(credentials)
    }
}
