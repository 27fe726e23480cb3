//! Form definitions backing the task list routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod ordering;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid page type")]
    InvalidPageType,

    #[error("invalid order field")]
    InvalidOrderField,
}
