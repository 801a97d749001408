use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result alias returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure kinds reported back to API callers.
///
/// Every variant is rendered as the `message` of a failure envelope.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A submitted field failed validation.
    #[error("{0}")]
    Form(String),
    /// A referenced area or menu is missing or owned by another restaurant.
    #[error("{0}")]
    InvalidSelection(String),
    /// The entity already exists.
    #[error("{0}")]
    Conflict(String),
    /// The `action` parameter is missing or unknown.
    #[error("Invalid action")]
    InvalidAction,
    /// Storage failure, carrying the underlying message.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
