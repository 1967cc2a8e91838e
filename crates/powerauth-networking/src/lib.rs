//! PowerAuth networking
//!
//! Each server call is described by an endpoint descriptor: an immutable value implementing
//! [`EndpointDefinition`] that names the address to call and the type of the response payload.
//! [`HttpClient`] accepts any descriptor, resolves its address against the server base URL,
//! sends the request and deserializes the response into the descriptor's response type.
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use powerauth_model::{BaseUrl, NonPersonalizedEncryptedPayload};
//! use powerauth_networking::{HttpClient, NonPersonalizedEncryptedEndpoint, Response};
//!
//! async fn example(request: NonPersonalizedEncryptedPayload) -> Response<NonPersonalizedEncryptedPayload> {
//!     let client = HttpClient::new(BaseUrl::from_str("https://api.example.com/enrollment-server")?);
//!     let endpoint = NonPersonalizedEncryptedEndpoint::new("/pa/activation/create");
//!     client.post(&endpoint, &request).await
//! }
//! ```

mod client;
mod endpoint;
mod endpoints;
mod error;
mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use endpoint::{Endpoint, EndpointDefinition, ResponseType};
pub use endpoints::{ActivationStatusEndpoint, NonPersonalizedEncryptedEndpoint};
pub use error::HttpError;
pub use response::Response;
