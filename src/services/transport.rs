use crate::models::{ProfileRequest, RawResponse, RequestBody};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use thiserror::Error;

/// Errors raised while talking to the profile service
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    BodyError(#[source] reqwest::Error),

    /// Raised by transports not backed by reqwest
    #[error("Transport error: {0}")]
    Other(String),
}

/// A transport error together with whatever response was received before it
///
/// `response` is `None` when the request never got a reply (connection
/// refused, DNS failure and so on).
#[derive(Debug, Error)]
#[error("{error}")]
pub struct TransportFailure {
    #[source]
    pub error: TransportError,
    pub response: Option<RawResponse>,
}

impl TransportFailure {
    pub fn new(error: TransportError, response: Option<RawResponse>) -> Self {
        Self { error, response }
    }

    pub fn without_response(error: impl Into<TransportError>) -> Self {
        Self::new(error.into(), None)
    }
}

/// The HTTP collaborator the profile client sends requests through
///
/// One call, one request, one completion. Implementations must not treat
/// non-2xx statuses as failures; those are returned as ordinary responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ProfileRequest) -> Result<RawResponse, TransportFailure>;
}

/// Transport backed by an async reqwest client
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default reqwest client (no timeout)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around a preconfigured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ProfileRequest) -> Result<RawResponse, TransportFailure> {
        let ProfileRequest {
            method, url, body, ..
        } = request;

        let builder = self.client.request(method.into(), &url);
        let builder = match &body {
            RequestBody::Form(pairs) => builder.form(pairs),
            RequestBody::Json(value) => builder.json(value),
        };

        let response = builder
            .send()
            .await
            .map_err(TransportFailure::without_response)?;

        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, TransportFailure> {
    let mut raw = RawResponse {
        status_code: response.status().as_u16(),
        status: response.status().to_string(),
        headers: collect_headers(response.headers()),
        body: None,
    };

    match response.text().await {
        Ok(text) => {
            raw.body = Some(text);
            Ok(raw)
        }
        // Status and headers already arrived; keep them with the error
        Err(e) => Err(TransportFailure::new(TransportError::BodyError(e), Some(raw))),
    }
}

fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
