//! Patient roster view state machine.

use tracing::debug;

use vetemr_client::api::RecordsApi;
use vetemr_client::session::SessionStore;
use vetemr_model::{AdmissionForm, Patient, policy};

use crate::error::SubmitError;

/// What the roster surface should currently show.
///
/// Each variant carries exactly the data for that state. `Empty` is kept
/// apart from `Errored` because the two render nothing alike: a clinic with
/// no patients is not a failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RosterState {
    /// Fetch in flight; show the loading affordance.
    #[default]
    Loading,
    /// Roster fetched with at least one patient, in service order.
    Loaded(Vec<Patient>),
    /// Roster fetched and the clinic has no patients.
    Empty,
    /// Fetch failed; the message is already operator-safe.
    Errored(String),
}

/// The clinic dashboard: the full patient list plus the admission flow.
pub struct RosterView<G> {
    gateway: G,
    session: SessionStore,
    state: RosterState,
}

impl<G: RecordsApi> RosterView<G> {
    /// Creates the view in `Loading`. Call [`load`](Self::load) to settle it.
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            state: RosterState::Loading,
        }
    }

    /// Current display state.
    pub fn state(&self) -> &RosterState {
        &self.state
    }

    /// Fetches the roster and settles the state.
    ///
    /// Safe to call again at any time; every entry to the roster re-fetches
    /// and there is no cache to go stale. Patients land in the exact order
    /// the service returned them.
    pub async fn load(&mut self) {
        self.state = RosterState::Loading;
        self.state = match self.gateway.list_patients().await {
            Ok(patients) if patients.is_empty() => RosterState::Empty,
            Ok(patients) => RosterState::Loaded(patients),
            Err(err) => {
                debug!(error = %err, "roster fetch failed");
                RosterState::Errored(err.user_message().to_owned())
            }
        };
    }

    /// Whether the admit affordance should be offered to the current
    /// operator. `false` when signed out.
    pub fn can_admit(&self) -> bool {
        self.session
            .current_identity()
            .is_some_and(|identity| policy::can_create_patient(&identity.role))
    }

    /// Validates and submits an admission, then re-fetches the full list.
    ///
    /// Validation failures return before anything touches the network, and a
    /// failed submission leaves the current list untouched. After a
    /// successful submission there is no local insertion or cache patching:
    /// the view re-enters `Loading` and the next `Loaded` reflects the
    /// service's own ordering. If that re-fetch fails the state is `Errored`
    /// even though the admission went through, which is why the created row
    /// is returned to the caller separately.
    pub async fn admit(&mut self, form: &AdmissionForm) -> Result<Patient, SubmitError> {
        let draft = form.build()?;
        let created = self.gateway.create_patient(&draft).await?;
        debug!(id = %created.id, "admission accepted, refreshing roster");
        self.load().await;
        Ok(created)
    }
}
