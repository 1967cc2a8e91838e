//! PowerAuth shared wire types.
//!
//! This crate holds the data-transfer shapes exchanged with a PowerAuth server: the
//! non-personalized encrypted payload, the `requestObject` / `responseObject` envelopes, the
//! server error model and the protocol constants used to build the
//! `X-PowerAuth-Authorization` header.
//!
//! Nothing here performs I/O or cryptography. Payload contents are opaque Base64 strings
//! produced and consumed by the encryption layer.

pub mod base_url;
pub mod envelope;
pub mod error;
pub mod payload;
pub mod protocol;

pub use self::base_url::BaseUrl;
pub use self::envelope::{ErrorModel, ErrorResponse, ObjectRequest, ObjectResponse, ResponseStatus};
pub use self::error::Error;
pub use self::payload::{
    ActivationStatusRequest, ActivationStatusResponse, NonPersonalizedEncryptedPayload,
};
pub use self::protocol::{AuthorizationHeader, SignatureType};
