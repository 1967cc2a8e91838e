//! Errors

use thiserror::Error;

/// Model Error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Url error
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// Invalid URL structure
    #[error("Invalid URL")]
    InvalidUrl,
    /// Signature type not known to the protocol
    #[error("Unknown signature type: `{0}`")]
    UnknownSignatureType(String),
}
