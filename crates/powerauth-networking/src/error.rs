//! HTTP error types

use thiserror::Error;

/// Errors reported while dispatching an endpoint
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP error with status code and a body that is not a PowerAuth error
    #[error("HTTP error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Error reported by the PowerAuth server
    #[error("Server error ({status}) {code}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// PowerAuth error code
        code: String,
        /// Error message
        message: String,
    },
    /// Endpoint address cannot be dispatched
    #[error("Invalid endpoint: `{0}`")]
    InvalidEndpoint(String),
    /// Model error, e.g. an unparseable base URL
    #[error(transparent)]
    Model(#[from] powerauth_model::Error),
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(String),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_builder() {
            HttpError::Build(err.to_string())
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else if err.is_decode() {
            HttpError::Serialization(err.to_string())
        } else if let Some(status) = err.status() {
            HttpError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}
