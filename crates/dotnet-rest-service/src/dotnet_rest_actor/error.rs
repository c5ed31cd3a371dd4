//! Error types for the DotnetRest resource.

use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors returned by every layer of the service: the store client, validation, auth and
/// the HTTP client. The HTTP layer maps each variant to a status code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DotnetRestError {
    /// The requested entry does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The request failed shape or bounds checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No credentials, or credentials that failed validation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid credentials without the role the operation needs.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The remote service could not be reached or answered unexpectedly.
    #[error("Transport error: {0}")]
    Transport(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DotnetRestError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: crate::model::DotnetRest::KIND_NAME,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<String> for DotnetRestError {
    fn from(msg: String) -> Self {
        DotnetRestError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for DotnetRestError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { kind, id } => DotnetRestError::NotFound { kind, id },
            FrameworkError::EntityError(inner) => match inner.downcast::<DotnetRestError>() {
                Ok(own) => *own,
                Err(other) => DotnetRestError::ActorCommunicationError(other.to_string()),
            },
            other => DotnetRestError::ActorCommunicationError(other.to_string()),
        }
    }
}
