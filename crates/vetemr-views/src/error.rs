//! Submission error union shared by the roster and timeline views.

use thiserror::Error;

use vetemr_client::GatewayError;
use vetemr_model::ValidationError;

/// Why a submission did not go through.
///
/// Validation and resolution rejections never reached the network; gateway
/// failures did reach the service and carry its outcome. Front ends branch
/// on this to highlight a field versus show a banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form input failed local validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The timeline has no resolved patient to file against.
    #[error("patient not resolved")]
    Unresolved,

    /// The service call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl SubmitError {
    /// Operator-facing sentence for banner or inline display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::Unresolved => "The patient's profile has not loaded.".to_string(),
            SubmitError::Gateway(err) => err.user_message().to_owned(),
        }
    }
}
