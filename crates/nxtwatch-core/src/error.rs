//! Error types for NxtWatch

use thiserror::Error;

/// Main error type for NxtWatch client operations
#[derive(Error, Debug)]
pub enum Error {
    /// The endpoint answered with a non-success HTTP status
    #[error("Request failed with status {0}")]
    Status(u16),

    /// HTTP client could not be constructed (TLS backend, resolver setup)
    #[error("Client setup error: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// The request never produced a response (DNS, TLS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configured API base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credential file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status code, if the failure came from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias using the NxtWatch [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
