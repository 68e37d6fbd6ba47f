//! Error types for specter-embed.

/// Alias for Results returning [`EmbedError`].
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Top-level error type for specter-embed.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("SPECTER API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
