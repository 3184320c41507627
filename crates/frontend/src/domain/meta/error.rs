use thiserror::Error;

/// Failure of a call to the metadata API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}
