use thiserror::Error;

/// Error type that captures common tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid record date `{value}`: {source}")]
    InvalidDate {
        value: String,
        source: chrono::format::ParseError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
