use thiserror::Error;

/// Reasons a spin request is turned away. Callers treat these as no-ops.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    #[error("a spin is already in progress")]
    AlreadySpinning,
    #[error("at least 2 options are needed to spin, found {count}")]
    NotEnoughOptions { count: usize },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
