//! Async HTTP gateway to the records service.
//!
//! All payloads ride under a `data` envelope. List responses degrade:
//! a missing envelope or a missing list field decodes as the empty list,
//! never as an error. Single-object responses with the object missing are
//! a decode failure, since the caller cannot proceed without the row.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use vetemr_model::{MedicalRecord, Patient, PatientDraft, RecordDraft};

use crate::api::{AuthApi, AuthGrant, Credentials, RecordsApi};
use crate::error::{AuthError, GatewayError, Result};
use crate::session::SessionStore;

/// Base URL for a records service running beside the client.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// HTTP request timeout. Bounds how long a view can sit in its loading
/// state against a dead server.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the records service REST API.
///
/// One operator action maps to at most one request per operation: there are
/// no retries and no response caching at this layer or above it. Every
/// request carries the session's bearer token when one is held.
pub struct HttpGateway {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl HttpGateway {
    /// Builds a gateway for `base_url`. A trailing slash on the base URL is
    /// tolerated.
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends the request and screens the status before any decoding.
    ///
    /// A 401 here means the service no longer honors our session: the store
    /// is cleared on the spot and the caller gets `SessionExpired`.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            self.session.expire();
            return Err(GatewayError::SessionExpired);
        }
        let message = failure_message(response).await;
        Err(classify_failure(status.as_u16(), message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let request = self.authorized(self.http.get(self.endpoint(path)));
        let response = self.execute(request).await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let request = self.authorized(self.http.post(self.endpoint(path)).json(body));
        let response = self.execute(request).await?;
        decode(response).await
    }
}

impl AuthApi for HttpGateway {
    /// `POST /auth/login`. A 401 or 403 here is a credentials problem, not a
    /// session problem, so the store is left untouched.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> std::result::Result<AuthGrant, AuthError> {
        debug!(email = %credentials.email, "signing in");
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let message = failure_message(response).await;
            return Err(AuthError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<AuthGrant> = response
            .json()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?;
        envelope
            .data
            .ok_or_else(|| AuthError::Decode("missing data object in login response".to_owned()))
    }
}

impl RecordsApi for HttpGateway {
    async fn list_patients(&self) -> Result<Vec<Patient>> {
        let envelope: Envelope<AnimalsPayload> = self.get_json("/animals").await?;
        let patients = envelope.data.unwrap_or_default().animals;
        debug!(count = patients.len(), "fetched roster");
        Ok(patients)
    }

    async fn get_patient(&self, id: &str) -> Result<Patient> {
        let envelope: Envelope<AnimalPayload> = self.get_json(&format!("/animals/{id}")).await?;
        envelope
            .data
            .map(|payload| payload.animal)
            .ok_or_else(missing_data)
    }

    async fn list_records(&self, animal_id: &str) -> Result<Vec<MedicalRecord>> {
        let envelope: Envelope<RecordsPayload> =
            self.get_json(&format!("/records/{animal_id}")).await?;
        Ok(envelope.data.unwrap_or_default().records)
    }

    async fn create_patient(&self, draft: &PatientDraft) -> Result<Patient> {
        let envelope: Envelope<AnimalPayload> = self.post_json("/animals", draft).await?;
        let patient = envelope
            .data
            .map(|payload| payload.animal)
            .ok_or_else(missing_data)?;
        info!(id = %patient.id, "admitted patient");
        Ok(patient)
    }

    async fn create_record(&self, draft: &RecordDraft) -> Result<MedicalRecord> {
        let envelope: Envelope<RecordPayload> = self.post_json("/records", draft).await?;
        let record = envelope
            .data
            .map(|payload| payload.record)
            .ok_or_else(missing_data)?;
        info!(id = %record.id, patient = %record.animal_id, "added medical record");
        Ok(record)
    }
}

/// Success envelope: every payload rides under `data`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct AnimalsPayload {
    #[serde(default)]
    animals: Vec<Patient>,
}

#[derive(Debug, Default, Deserialize)]
struct RecordsPayload {
    #[serde(default)]
    records: Vec<MedicalRecord>,
}

#[derive(Debug, Deserialize)]
struct AnimalPayload {
    animal: Patient,
}

#[derive(Debug, Deserialize)]
struct RecordPayload {
    record: MedicalRecord,
}

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn missing_data() -> GatewayError {
    GatewayError::Decode("missing data object in response".to_owned())
}

/// Decodes a success body. `reqwest` flags serde failures as decode errors,
/// which the `From` conversion maps onto [`GatewayError::Decode`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    Ok(response.json::<T>().await?)
}

/// Best-effort extraction of the service's own failure message; falls back
/// to the status's canonical reason.
async fn failure_message(response: Response) -> String {
    let fallback = response
        .status()
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_owned();
    match response.text().await {
        Ok(body) => serde_json::from_str::<FailureBody>(&body)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn classify_failure(status: u16, message: String) -> GatewayError {
    match status {
        404 => GatewayError::NotFound,
        400 | 422 => GatewayError::Validation(message),
        status => GatewayError::Api { status, message },
    }
}
