//! Store-specific error types and conversions.

use unidex_core::error::UnidexError;

/// Local-storage error type. Corrupt slot content never reaches this
/// level; the local store self-heals by reseeding instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<StoreError> for UnidexError {
    fn from(err: StoreError) -> Self {
        UnidexError::Storage(err.to_string())
    }
}
