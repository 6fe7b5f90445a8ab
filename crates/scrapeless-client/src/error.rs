//! Error types for the Scrapeless client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while talking to the Scrapeless API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Non-success HTTP status from the API
    #[error("Scrapeless API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// An asynchronous crawler job finished unsuccessfully
    #[error("{kind} job {id} ended with status '{status}': {message}")]
    Job {
        kind: &'static str,
        id: String,
        status: String,
        message: String,
    },

    /// The handle was built without a credential and cannot reach the API
    #[error("No Scrapeless API key configured; set SCRAPELESS_API_KEY or pass an API key")]
    NotConnected,

    /// The API answered with a body the client cannot interpret
    #[error("Unexpected response from Scrapeless API: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for scrapeless_core::Error {
    fn from(err: ClientError) -> Self {
        scrapeless_core::Error::Other(anyhow::Error::new(err))
    }
}
