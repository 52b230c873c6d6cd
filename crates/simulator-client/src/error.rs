//! Error types for the simulator client.

use thiserror::Error;


/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Base URL or endpoint URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL parsed but cannot be used as an API root.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure reported by the transport.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the API.
        message: String,
    },

    /// Response body did not decode into the expected records.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request body could not be encoded.
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// Wraps any error as a transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Transport(err.into())
    }

    /// Returns true for failures that happened before or during the HTTP exchange.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::NotFound(_) | Self::Api { .. }
        )
    }

    /// Returns true when the response arrived but its body was unusable.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
