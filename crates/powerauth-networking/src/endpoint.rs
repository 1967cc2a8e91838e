//! Endpoint descriptors
//!
//! An endpoint descriptor is an immutable value naming the address of one kind of call and the
//! type its response body deserializes into. [`HttpClient`](crate::HttpClient) accepts any
//! [`EndpointDefinition`], so adding a call never requires touching the dispatcher.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

/// Capability every endpoint descriptor provides to the dispatcher
///
/// Implementations carry no mutable state: both accessors are pure reads of data fixed at
/// construction.
pub trait EndpointDefinition: Send + Sync {
    /// Shape of the response payload
    type Response: DeserializeOwned + 'static;

    /// Address of the endpoint, a path relative to the server base URL or an absolute URL
    ///
    /// Not validated here. The dispatcher rejects addresses it cannot resolve.
    fn endpoint(&self) -> &str;

    /// Token describing [`Self::Response`]
    fn response_type(&self) -> ResponseType<Self::Response> {
        ResponseType::new()
    }
}

impl<E: EndpointDefinition + ?Sized> EndpointDefinition for &E {
    type Response = E::Response;

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }

    fn response_type(&self) -> ResponseType<Self::Response> {
        (**self).response_type()
    }
}

/// Runtime token for the response type `T`
///
/// Deserialization is driven by `T` statically. The token exists for code that needs to inspect
/// the expected shape at runtime, e.g. for logging or for routing through a registry keyed by
/// response type. Tokens of different type parameters compare by the type they stand for.
pub struct ResponseType<T> {
    id: TypeId,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> ResponseType<T> {
    /// Token for `T`
    pub fn new() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            _marker: PhantomData,
        }
    }
}

impl<T> ResponseType<T> {
    /// [`TypeId`] of the response type
    ///
    /// Not the [`TypeId`] of the token itself, which `Any::type_id` reports.
    pub fn response_type_id(&self) -> TypeId {
        self.id
    }

    /// Name of the response type, for diagnostics only
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Whether the token stands for `U`
    pub fn is<U: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<U>()
    }
}

impl<T: 'static> Default for ResponseType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ResponseType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResponseType<T> {}

impl<T, U> PartialEq<ResponseType<U>> for ResponseType<T> {
    fn eq(&self, other: &ResponseType<U>) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ResponseType<T> {}

impl<T> Hash for ResponseType<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for ResponseType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResponseType").field(&self.name).finish()
    }
}

/// Endpoint descriptor generic over its response shape
///
/// ```
/// use powerauth_model::NonPersonalizedEncryptedPayload;
/// use powerauth_networking::{Endpoint, EndpointDefinition};
///
/// let endpoint = Endpoint::<NonPersonalizedEncryptedPayload>::new("/pa/v2/signature/validate");
/// assert_eq!(endpoint.endpoint(), "/pa/v2/signature/validate");
/// assert!(endpoint.response_type().is::<NonPersonalizedEncryptedPayload>());
/// ```
pub struct Endpoint<R> {
    address: String,
    _response: PhantomData<fn() -> R>,
}

impl<R> Endpoint<R> {
    /// Create new [`Endpoint`] with the given address
    pub fn new<S>(address: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            address: address.into(),
            _response: PhantomData,
        }
    }

    /// Create new [`Endpoint`] whose address is the absolute path made of `segments`
    ///
    /// `Endpoint::from_segments(&["pa", "token", id])` addresses `/pa/token/<id>`.
    pub fn from_segments(segments: &[&str]) -> Self {
        let path = segments
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        Self::new(format!("/{path}"))
    }
}

impl<R> EndpointDefinition for Endpoint<R>
where
    R: DeserializeOwned + 'static,
{
    type Response = R;

    fn endpoint(&self) -> &str {
        &self.address
    }
}

impl<R> Clone for Endpoint<R> {
    fn clone(&self) -> Self {
        Self::new(self.address.clone())
    }
}

impl<R> PartialEq for Endpoint<R> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<R> Eq for Endpoint<R> {}

impl<R> Hash for Endpoint<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl<R> fmt::Debug for Endpoint<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("address", &self.address)
            .field("response", &std::any::type_name::<R>())
            .finish()
    }
}
