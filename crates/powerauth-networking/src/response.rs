//! HTTP response types

use crate::error::HttpError;

/// Result of dispatching an endpoint, generic over the body type R and error type E
pub type Response<R, E = HttpError> = Result<R, E>;
