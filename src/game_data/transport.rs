use async_trait::async_trait;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde_json::Value;
use url::Url;

use super::params::ParamValue;
use super::path::is_dot_segment;
use crate::Result;
use crate::error::Error;

/// A fully resolved Game Data request, ready to be sent by a [`Transport`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointRequest {
    /// Name of the operation this request was prepared for
    pub operation: &'static str,
    /// Raw path segments, e.g. `["data", "wow", "item", "19019"]`. Not percent-encoded.
    pub segments: Vec<String>,
    /// Query parameters. The first entry is always `namespace`.
    pub query: Vec<(String, ParamValue)>,
}

impl EndpointRequest {
    /// Returns the unencoded path, e.g. `/data/wow/item/19019`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Returns the exposed value of the query parameter `key`.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.expose())
    }
}

/// Performs the HTTP GET for a prepared [`EndpointRequest`] and decodes the body.
///
/// Timeouts, proxies and TLS settings are the transport's concern. Implementations return the
/// decoded body unmodified and report every failure (connection errors, non-success statuses,
/// undecodable bodies) as an [`Error`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &EndpointRequest) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, request: &EndpointRequest) -> Result<Value> {
        (**self).get(request).await
    }
}

/// [`Transport`] backed by [`reqwest`].
#[derive(Clone, Debug)]
pub struct HttpTransport {
    host: Url,
    client: ReqwestClient,
}

impl HttpTransport {
    /// Creates a transport for `host` with the SDK's default headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be created.
    pub fn new(host: &str) -> Result<HttpTransport> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("wow_game_data_sdk"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Self::with_client(host, client)
    }

    /// Creates a transport for `host` that sends requests through a caller-configured client,
    /// e.g. one with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry a path.
    pub fn with_client(host: &str, client: ReqwestClient) -> Result<HttpTransport> {
        let host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::validation(format!("{host} cannot be used as a base URL")));
        }

        Ok(Self { host, client })
    }

    /// Returns the host URL for the transport.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Builds the full URL for `request`, percent-encoding every path segment.
    pub(crate) fn url(&self, request: &EndpointRequest) -> Result<Url> {
        if let Some(segment) = request.segments.iter().find(|s| is_dot_segment(s)) {
            return Err(Error::validation(format!(
                "dot segment {segment:?} in {}",
                request.path()
            )));
        }

        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::validation(format!("{} cannot be a base URL", self.host)))?
            .pop_if_empty()
            .extend(&request.segments);

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &EndpointRequest) -> Result<Value> {
        let query: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.expose()))
            .collect();

        let http_request = self
            .client
            .request(Method::GET, self.url(request)?)
            .query(&query)
            .build()?;

        crate::request(&self.client, http_request).await
    }
}
