//! # Framework Errors
//!
//! Common error types shared by every resource actor and client. Entity-specific
//! failures travel inside [`FrameworkError::EntityError`]; a missing identifier is
//! always reported as [`FrameworkError::NotFound`] so callers can map it without
//! knowing the entity type.

/// Errors that can occur within the resource framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Builds a `NotFound` for the given entity kind and identifier.
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
