use crate::api::error::ApiError;
use crate::models::RecordId;
use crate::validation::ValidationError;
use thiserror::Error;

/// How an operation failed, as the user sees it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum FailureKind {
    Network,
    Application,
    Validation,
    NotFound,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("No {kind} with id {id}")]
    NoSuchRecord { kind: &'static str, id: RecordId },

    #[error("Nothing is waiting for confirmation")]
    NothingToConfirm,

    #[error("No form is open")]
    NoOpenForm,
}

impl OperationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            OperationError::Validation(_)
            | OperationError::NothingToConfirm
            | OperationError::NoOpenForm => FailureKind::Validation,
            OperationError::Api(ApiError::NotFound { .. })
            | OperationError::NoSuchRecord { .. } => FailureKind::NotFound,
            OperationError::Api(ApiError::Application { .. }) => FailureKind::Application,
            OperationError::Api(_) => FailureKind::Network,
        }
    }
}

/// Outcome of the joined initial load when at least one side failed.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("Failed to load users: {0}")]
    Users(ApiError),

    #[error("Failed to load shops: {0}")]
    Shops(ApiError),

    #[error("Failed to load users ({users}) and shops ({shops})")]
    Both { users: ApiError, shops: ApiError },
}
