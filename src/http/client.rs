//! HTTP client and request orchestration
//!
//! The client is built once from an ordered list of functional options and is
//! immutable afterwards, so it can be shared freely across concurrent calls.
//! Every verb method funnels into [`HttpClient::request`], which runs the
//! per-call pipeline: marshal the payload, attach auth, dispatch through the
//! configured transport, classify the status, extract the body.

use super::requester::{Requester, RetryingRequester};
use crate::auth::AuthFn;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Client state under construction; mutated only by [`ClientOption`]s
#[derive(Default)]
pub struct ClientConfig {
    key: Option<String>,
    requester: Option<Arc<dyn Requester>>,
    auth: Option<AuthFn>,
}

/// A functional configuration option, applied in order at construction time
pub type ClientOption = Box<dyn FnOnce(&mut ClientConfig)>;

/// Set the static API key held by the client
pub fn with_key(key: impl Into<String>) -> ClientOption {
    let key = key.into();
    Box::new(move |c: &mut ClientConfig| c.key = Some(key))
}

/// Inject a custom transport, used mostly for testing
pub fn with_requester(requester: Arc<dyn Requester>) -> ClientOption {
    Box::new(move |c: &mut ClientConfig| c.requester = Some(requester))
}

/// Set the auth function applied to every outgoing request
pub fn with_auth(auth: AuthFn) -> ClientOption {
    Box::new(move |c: &mut ClientConfig| c.auth = Some(auth))
}

/// HTTP client wrapping a retrying transport with JSON marshaling and
/// pluggable authentication
pub struct HttpClient {
    key: Option<String>,
    requester: Arc<dyn Requester>,
    auth: Option<AuthFn>,
}

impl HttpClient {
    /// Create a client from an ordered list of options. A missing transport
    /// falls back to the default [`RetryingRequester`].
    pub fn new(options: impl IntoIterator<Item = ClientOption>) -> Self {
        let mut config = ClientConfig::default();
        for option in options {
            option(&mut config);
        }

        let requester = config
            .requester
            .unwrap_or_else(|| Arc::new(RetryingRequester::default()));

        Self {
            key: config.key,
            requester,
            auth: config.auth,
        }
    }

    /// The static API key, if one was configured
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Make a GET request
    pub async fn get(&self, endpoint: &str) -> Result<HttpResponse> {
        self.request::<serde_json::Value>(Method::GET, endpoint, None)
            .await
    }

    /// Make a POST request with a JSON payload
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<HttpResponse> {
        self.request(Method::POST, endpoint, Some(payload)).await
    }

    /// Make a PUT request with a JSON payload
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<HttpResponse> {
        self.request(Method::PUT, endpoint, Some(payload)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, endpoint: &str) -> Result<HttpResponse> {
        self.request::<serde_json::Value>(Method::DELETE, endpoint, None)
            .await
    }

    /// Make a request with any method and an optional JSON payload.
    ///
    /// The verb methods are thin aliases over this routine.
    pub async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&T>,
    ) -> Result<HttpResponse> {
        let url = Url::parse(endpoint)?;
        let mut req = Request::new(method.clone(), url);

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(Error::Serialize)?;
            *req.body_mut() = Some(Body::from(body));
        }
        req.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(auth) = &self.auth {
            auth(&mut req)?;
        }

        let resp = self.requester.execute(req).await?;

        let status = resp.status();
        let headers = resp.headers().clone();

        if !status.is_success() {
            let body = resp.text().await.map_err(Error::Read)?;
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = resp.bytes().await.map_err(Error::Read)?;
        debug!("Request succeeded: {} {}", method, endpoint);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("key", &self.key)
            .field("has_auth", &self.auth.is_some())
            .finish_non_exhaustive()
    }
}

/// One completed round-trip: status code, headers, and the raw body bytes
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpResponse {
    /// The response status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::JsonParse)
    }

    fn content_type(&self) -> &str {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content_type = self.content_type();
        let body = if content_type.contains("json") || content_type.contains("text") {
            String::from_utf8_lossy(&self.body).into_owned()
        } else {
            format!("<binary> len {}", self.body.len())
        };
        write!(
            f,
            "StatusCode: {}, Headers: {:?}, Content-Type: {}, Body: {}",
            self.status.as_u16(),
            self.headers,
            content_type,
            body
        )
    }
}
