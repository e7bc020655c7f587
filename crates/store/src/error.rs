use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by store operations.
///
/// Every variant is recoverable: the caller reports it and may re-invoke
/// the same operation. Nothing here is allowed to terminate a render.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Remote call failed; carries the human-readable message extracted
    /// from the server payload, or a generic fallback.
    #[error("{0}")]
    Remote(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}
