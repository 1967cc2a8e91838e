//! REST envelopes
//!
//! Every PowerAuth request body is wrapped as `{"requestObject": ...}` and every response as
//! `{"status": "OK" | "ERROR", "responseObject": ...}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error code used when the server error body has no recognizable structure
pub const GENERIC_ERROR_CODE: &str = "ERR_GENERIC";

/// Request envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRequest<T> {
    /// Wrapped request
    pub request_object: T,
}

impl<T> ObjectRequest<T> {
    /// Create new [`ObjectRequest`]
    pub fn new(request_object: T) -> Self {
        Self { request_object }
    }
}

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    /// Request succeeded
    #[serde(rename = "OK")]
    Ok,
    /// Request failed, `responseObject` holds an [`ErrorModel`]
    #[serde(rename = "ERROR")]
    Error,
}

/// Response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectResponse<T> {
    /// Response status
    pub status: ResponseStatus,
    /// Wrapped response
    pub response_object: T,
}

impl<T> ObjectResponse<T> {
    /// Unwrap the response object
    pub fn into_inner(self) -> T {
        self.response_object
    }
}

/// Error envelope returned by the server
pub type ErrorResponse = ObjectResponse<ErrorModel>;

/// Server error
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorModel {
    /// Error code, e.g. `ERR_AUTHENTICATION`
    pub code: String,
    /// Human readable description
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ErrorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code: {}, message: {}", self.code, self.message)
    }
}

impl ErrorModel {
    /// Create new [`ErrorModel`]
    pub fn new<C, M>(code: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error model from a json body
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;

        Ok(Self::from_value(value))
    }

    /// Error model from a json [`Value`]
    ///
    /// Accepts the full error envelope or a bare `{"code", "message"}` object. Anything else
    /// becomes a [`GENERIC_ERROR_CODE`] error carrying the raw value as message.
    pub fn from_value(value: Value) -> Self {
        if let Ok(envelope) = serde_json::from_value::<ErrorResponse>(value.clone()) {
            return envelope.response_object;
        }

        match serde_json::from_value::<ErrorModel>(value.clone()) {
            Ok(model) => model,
            Err(_) => {
                tracing::debug!("Unrecognized error body: {}", value);
                Self {
                    code: GENERIC_ERROR_CODE.to_string(),
                    message: value.to_string(),
                }
            }
        }
    }
}
