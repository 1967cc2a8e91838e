//! HTTP client dispatching endpoint descriptors

use std::time::Duration;

use powerauth_model::{AuthorizationHeader, BaseUrl, ErrorModel, ObjectRequest, ObjectResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::endpoint::EndpointDefinition;
use crate::error::HttpError;
use crate::response::Response;

/// HTTP client sending requests to a PowerAuth server
///
/// Every call is a `POST` with a JSON body wrapped in `requestObject`. The response is
/// unwrapped from `responseObject` and deserialized into the endpoint's response type.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a new HTTP client builder
    pub fn builder(base_url: BaseUrl) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url)
    }

    /// Create an HttpClient from a reqwest::Client
    pub fn from_reqwest(client: reqwest::Client, base_url: BaseUrl) -> Self {
        Self {
            inner: client,
            base_url,
        }
    }

    /// Base URL relative endpoint addresses are resolved against
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Resolve the address of `endpoint` into a request URL
    ///
    /// An absolute `http`/`https` address is used as is, anything else is appended to the
    /// base URL. Blank addresses are rejected.
    pub fn resolve<E>(&self, endpoint: &E) -> Response<Url>
    where
        E: EndpointDefinition + ?Sized,
    {
        let address = endpoint.endpoint().trim();

        if address.is_empty() {
            return Err(HttpError::InvalidEndpoint(endpoint.endpoint().to_string()));
        }

        if let Ok(url) = Url::parse(address) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        Ok(self.base_url.join(address)?)
    }

    /// POST `body` to `endpoint`
    #[instrument(skip_all, fields(endpoint = %endpoint.endpoint()))]
    pub async fn post<E, B>(&self, endpoint: &E, body: &B) -> Response<E::Response>
    where
        E: EndpointDefinition + ?Sized,
        B: Serialize + ?Sized,
    {
        self.dispatch(endpoint, body, None).await
    }

    /// POST `body` to `endpoint` with a `X-PowerAuth-Authorization` header
    #[instrument(skip_all, fields(endpoint = %endpoint.endpoint()))]
    pub async fn post_signed<E, B>(
        &self,
        endpoint: &E,
        body: &B,
        authorization: &AuthorizationHeader,
    ) -> Response<E::Response>
    where
        E: EndpointDefinition + ?Sized,
        B: Serialize + ?Sized,
    {
        self.dispatch(endpoint, body, Some(authorization)).await
    }

    async fn dispatch<E, B>(
        &self,
        endpoint: &E,
        body: &B,
        authorization: Option<&AuthorizationHeader>,
    ) -> Response<E::Response>
    where
        E: EndpointDefinition + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.resolve(endpoint)?;
        tracing::debug!(
            "Dispatching {} expecting {}",
            url,
            endpoint.response_type().type_name()
        );

        let mut request = self.inner.post(url).json(&ObjectRequest::new(body));

        if let Some(authorization) = authorization {
            request = request.header(authorization.header_key(), authorization.to_string());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!("Response status {}", status);

        parse_response(status, &text)
    }
}

/// Unwrap a PowerAuth response body
fn parse_response<R>(status: u16, body: &str) -> Response<R>
where
    R: DeserializeOwned,
{
    if !(200..300).contains(&status) {
        return Err(match ErrorModel::from_json(body) {
            Ok(error) => HttpError::Server {
                status,
                code: error.code,
                message: error.message,
            },
            Err(_) => HttpError::Status {
                status,
                message: body.to_string(),
            },
        });
    }

    let value: Value = serde_json::from_str(body).map_err(|err| {
        tracing::warn!("Http Response error: {}", err);
        HttpError::from(err)
    })?;

    if value.get("status").and_then(Value::as_str) == Some("ERROR") {
        let error = ErrorModel::from_value(value);
        return Err(HttpError::Server {
            status,
            code: error.code,
            message: error.message,
        });
    }

    serde_json::from_value::<ObjectResponse<R>>(value)
        .map(ObjectResponse::into_inner)
        .map_err(|err| {
            tracing::warn!("Http Response error: {}", err);
            HttpError::from(err)
        })
}

/// HTTP client builder for configuring proxy, TLS and timeout settings
#[derive(Debug)]
pub struct HttpClientBuilder {
    base_url: BaseUrl,
    accept_invalid_certs: bool,
    proxy: Option<ProxyConfig>,
    timeout: Option<Duration>,
}

#[derive(Debug)]
struct ProxyConfig {
    url: Url,
    matcher: Option<regex::Regex>,
}

impl HttpClientBuilder {
    /// Create a new builder for a client targeting `base_url`
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            accept_invalid_certs: false,
            proxy: None,
            timeout: None,
        }
    }

    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set a proxy URL used for every request
    pub fn proxy(mut self, url: Url) -> Self {
        self.proxy = Some(ProxyConfig { url, matcher: None });
        self
    }

    /// Set a proxy URL used only for hosts matching `pattern`
    pub fn proxy_with_matcher(mut self, url: Url, pattern: &str) -> Response<Self> {
        let matcher = regex::Regex::new(pattern)
            .map_err(|e| HttpError::Proxy(format!("Invalid proxy pattern: {}", e)))?;
        self.proxy = Some(ProxyConfig {
            url,
            matcher: Some(matcher),
        });
        Ok(self)
    }

    /// Set a total timeout for each request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<HttpClient> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_config) = self.proxy {
            let proxy_url = proxy_config.url.to_string();
            let proxy = if let Some(matcher) = proxy_config.matcher {
                reqwest::Proxy::custom(move |url| {
                    if matcher.is_match(url.host_str().unwrap_or("")) {
                        Some(proxy_url.clone())
                    } else {
                        None
                    }
                })
            } else {
                reqwest::Proxy::all(&proxy_url).map_err(|e| HttpError::Proxy(e.to_string()))?
            };
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(HttpError::from)?;
        Ok(HttpClient {
            inner: client,
            base_url: self.base_url,
        })
    }
}
