use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded writing key: {key}")]
    QuotaExceeded { key: String },

    #[error("unable to persist data; free up local storage and retry ({0})")]
    CannotPersist(String),

    #[error("session {0} is already completed and cannot be reopened")]
    SessionCompleted(String),

    #[error("storage version {found} does not match {expected}")]
    VersionMismatch { found: String, expected: String },

    #[error("stored data under {key} is corrupt: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),
}

impl StorageError {
    /// Errors that mean the stored root cannot be read as current data.
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self,
            Self::VersionMismatch { .. } | Self::Deserialization { .. }
        )
    }
}
