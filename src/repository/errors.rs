use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => RepositoryError::StorageError(format!("CSV read error: {err}")),
            csv::ErrorKind::Deserialize { .. } => {
                RepositoryError::ValidationError(format!("Invalid task record: {err}"))
            }
            _ => RepositoryError::Unexpected(format!("Unexpected csv error: {err}")),
        }
    }
}

#[cfg(feature = "server")]
impl From<actix_session::SessionGetError> for RepositoryError {
    fn from(err: actix_session::SessionGetError) -> Self {
        RepositoryError::StorageError(format!("Session read error: {err}"))
    }
}

#[cfg(feature = "server")]
impl From<actix_session::SessionInsertError> for RepositoryError {
    fn from(err: actix_session::SessionInsertError) -> Self {
        RepositoryError::StorageError(format!("Session write error: {err}"))
    }
}
