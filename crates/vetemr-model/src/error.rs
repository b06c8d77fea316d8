use thiserror::Error;

/// Rejections raised while building drafts from form input.
///
/// Each variant names the offending field so a front end can highlight it.
/// A draft is never produced alongside one of these; validation failures
/// stay on the client and nothing reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    #[error("{field} is required")]
    MissingField {
        /// Form field to highlight.
        field: &'static str,
    },
    /// A numeric field did not parse, or parsed to a negative or non-finite
    /// value.
    #[error("{field} must be a non-negative number")]
    InvalidNumber {
        /// Form field to highlight.
        field: &'static str,
    },
}

impl ValidationError {
    /// The form field this rejection points at.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } | ValidationError::InvalidNumber { field } => {
                field
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
