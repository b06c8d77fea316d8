//! Single-patient timeline view state machine.

use tracing::debug;

use vetemr_client::api::RecordsApi;
use vetemr_client::error::GatewayError;
use vetemr_client::session::SessionStore;
use vetemr_model::{MedicalRecord, Patient, RecordForm, policy};

use crate::error::SubmitError;

/// What the timeline surface should currently show.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TimelineState {
    /// Both fetches in flight; show the loading affordance.
    #[default]
    Loading,
    /// Profile and history arrived together. A patient with no visits is
    /// `Loaded` with zero records, not an error.
    Loaded {
        /// The patient's profile.
        patient: Patient,
        /// Medical history in the exact order the service returned it.
        records: Vec<MedicalRecord>,
    },
    /// The patient id does not exist.
    NotFound,
    /// Either leg failed for any other reason; the message is operator-safe.
    Errored(String),
}

/// One patient's profile beside their chronological medical history.
pub struct TimelineView<G> {
    gateway: G,
    session: SessionStore,
    animal_id: String,
    state: TimelineState,
}

impl<G: RecordsApi> TimelineView<G> {
    /// Creates the view for one patient id, in `Loading`.
    pub fn new(gateway: G, session: SessionStore, animal_id: impl Into<String>) -> Self {
        Self {
            gateway,
            session,
            animal_id: animal_id.into(),
            state: TimelineState::Loading,
        }
    }

    /// The patient id this timeline is bound to.
    pub fn animal_id(&self) -> &str {
        &self.animal_id
    }

    /// Current display state.
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    /// Fetches the profile and the history concurrently and settles once
    /// both are done.
    ///
    /// The two legs always run to completion before the state is decided;
    /// this is a join, not a race, and one leg failing never abandons the
    /// other mid-flight. There is no partial render: profile and history
    /// appear together or not at all. A missing patient wins over whatever
    /// the records leg did.
    pub async fn load(&mut self) {
        self.state = TimelineState::Loading;
        let (patient, records) = tokio::join!(
            self.gateway.get_patient(&self.animal_id),
            self.gateway.list_records(&self.animal_id),
        );
        self.state = match (patient, records) {
            (Ok(patient), Ok(records)) => TimelineState::Loaded { patient, records },
            (Err(GatewayError::NotFound), _) => TimelineState::NotFound,
            (Err(err), _) | (_, Err(err)) => {
                debug!(error = %err, patient = %self.animal_id, "timeline fetch failed");
                TimelineState::Errored(err.user_message().to_owned())
            }
        };
    }

    /// Whether the add-record affordance should be offered to the current
    /// operator. `false` when signed out.
    pub fn can_add_record(&self) -> bool {
        self.session
            .current_identity()
            .is_some_and(|identity| policy::can_create_record(&identity.role))
    }

    /// Validates and submits a record for this timeline's patient, then
    /// re-runs both fetches.
    ///
    /// The draft is bound to the resolved profile's id; callers never pass
    /// one in, and a view that is not `Loaded` refuses with
    /// [`SubmitError::Unresolved`] before any request goes out. After a
    /// successful submission the view re-enters `Loading` and the new record
    /// appears wherever the service orders it. The created row is returned
    /// so the caller can confirm the submission even if the reload then
    /// fails.
    pub async fn add_record(&mut self, form: &RecordForm) -> Result<MedicalRecord, SubmitError> {
        let TimelineState::Loaded { patient, .. } = &self.state else {
            return Err(SubmitError::Unresolved);
        };
        let draft = form.build(&patient.id)?;
        let created = self.gateway.create_record(&draft).await?;
        debug!(id = %created.id, patient = %self.animal_id, "record accepted, refreshing timeline");
        self.load().await;
        Ok(created)
    }
}
