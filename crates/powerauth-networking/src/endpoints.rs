//! PowerAuth endpoint descriptors

use powerauth_model::{ActivationStatusResponse, NonPersonalizedEncryptedPayload};

use crate::endpoint::EndpointDefinition;

/// Endpoint transporting a non-personalized encrypted payload
///
/// The address is supplied by the caller since the same envelope is used by several server
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonPersonalizedEncryptedEndpoint {
    url: String,
}

impl NonPersonalizedEncryptedEndpoint {
    /// Create new [`NonPersonalizedEncryptedEndpoint`] for `url`
    pub fn new<S>(url: S) -> Self
    where
        S: Into<String>,
    {
        Self { url: url.into() }
    }
}

impl EndpointDefinition for NonPersonalizedEncryptedEndpoint {
    type Response = NonPersonalizedEncryptedPayload;

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Activation status endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActivationStatusEndpoint;

impl ActivationStatusEndpoint {
    /// Address of the activation status endpoint
    pub const PATH: &'static str = "/pa/activation/status";

    /// Create new [`ActivationStatusEndpoint`]
    pub fn new() -> Self {
        Self
    }
}

impl EndpointDefinition for ActivationStatusEndpoint {
    type Response = ActivationStatusResponse;

    fn endpoint(&self) -> &str {
        Self::PATH
    }
}
