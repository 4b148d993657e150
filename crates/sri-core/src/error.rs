use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session {0} is already completed")]
    SessionCompleted(String),

    #[error("participant has not consented to the assessment")]
    ConsentRequired,
}
