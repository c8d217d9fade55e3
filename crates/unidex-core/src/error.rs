//! Error types for the unidex system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnidexError {
    #[error("University not found: {id}")]
    NotFound { id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Request failed: {operation}")]
    RequestFailed { operation: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type UnidexResult<T> = Result<T, UnidexError>;
