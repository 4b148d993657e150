use thiserror::Error;

use crate::scale::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("insufficient data to calculate results: {0}")]
    InsufficientData(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
