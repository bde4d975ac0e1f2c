use thiserror::Error;

/// Errors surfaced by the shortener service.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The code is not one this deployment issued, or the record behind
    /// it is gone. Callers cannot tell the two apart.
    #[error("short code not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors raised by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("identifier {0} is already stored")]
    Conflict(u64),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        ShortenerError::Storage(value.to_string())
    }
}
