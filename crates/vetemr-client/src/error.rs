//! Error taxonomy for talking to the records service.

use thiserror::Error;

/// Sign-in failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// The service rejected the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The auth endpoint answered with an unexpected status.
    #[error("auth service error (status {status}): {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body when one was present.
        message: String,
    },

    /// Transport-level failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the wire contract.
    #[error("malformed auth response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Returns a calm sentence suitable for the sign-in surface.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidCredentials => "Invalid credentials. Please try again.",
            Self::Network(_) => {
                "Could not reach the records service. Check the server address and your connection."
            }
            Self::Service { .. } => "The records service could not sign you in right now.",
            Self::Decode(_) => "The records service answered in an unexpected format.",
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Failures on records-service calls.
///
/// One taxonomy covers every roster and timeline operation so views can map
/// outcomes to states without inspecting status codes themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// HTTP 404: the requested patient or resource does not exist.
    #[error("not found")]
    NotFound,

    /// HTTP 400 or 422: the service rejected the submitted payload.
    #[error("rejected by the service: {0}")]
    Validation(String),

    /// HTTP 401 on an authenticated call: the session is no longer valid.
    /// The session store has already been cleared when this surfaces.
    #[error("session expired")]
    SessionExpired,

    /// Any other non-success status.
    #[error("service error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body when one was present.
        message: String,
    },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// A success response whose body did not match the wire contract.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Returns an operator-facing sentence with no status codes or URLs in
    /// it. Banner and empty-state rendering goes through this.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound => "That patient could not be found.",
            Self::Validation(_) => "The service rejected the submitted details.",
            Self::SessionExpired => "Your session has expired. Please sign in again.",
            Self::Api { .. } => "The records service reported an error. Please try again shortly.",
            Self::Network(_) => {
                "Could not reach the records service. Check the server address and your connection."
            }
            Self::Decode(_) => "The records service answered in an unexpected format.",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for records-service operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_stay_calm() {
        let err = GatewayError::Api {
            status: 503,
            message: "upstream down".to_string(),
        };
        assert!(!err.user_message().contains("503"));

        let err = GatewayError::Network("connection refused".to_string());
        assert!(err.user_message().contains("records service"));

        assert_eq!(
            AuthError::InvalidCredentials.user_message(),
            "Invalid credentials. Please try again."
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = GatewayError::Api {
            status: 503,
            message: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "service error (status 503): upstream down");
    }
}
