//! Error types for Visitor Desk.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Speech synthesis error: {0}")]
    Speech(#[from] SpeechError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Record sink errors.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write record store: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Speech synthesis errors.
///
/// `Unavailable` is deliberately distinct from request failures: the
/// transport reports it as a 503 so callers can fall back to text-only.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Text-to-speech service unavailable")]
    Unavailable,

    #[error("Synthesis request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response from synthesis service: {0}")]
    InvalidResponse(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
