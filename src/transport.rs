//! Transport seam between the client and the HTTP stack
//!
//! The client talks to the backend through the `Transport` trait so that
//! tests (and the CLI's `--mock` mode) can swap in a deterministic,
//! network-free implementation. The real implementation wraps `reqwest`.

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde_json::Value;

/// A decoded HTTP exchange: success flag plus JSON body
///
/// The body of a failed exchange is kept so the caller can extract the
/// server-supplied `error` message.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// Whether the transport-level status indicated success (2xx)
    pub ok: bool,
    /// Decoded JSON body; `Value::Null` when a failed response had no
    /// parseable body
    pub body: Value,
}

/// Minimal async HTTP surface the client needs
///
/// Implementations must be usable behind a shared reference from concurrent
/// tasks, hence `Send + Sync`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request and decode the JSON response
    async fn get_json(&self, url: &str) -> ApiResult<HttpResponse>;

    /// Issue a POST request with a JSON body and decode the JSON response
    async fn post_json(&self, url: &str, body: &Value) -> ApiResult<HttpResponse>;
}

/// Production transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with a 30-second request timeout
    pub fn new() -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::new(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpTransport { client })
    }

    async fn decode(response: reqwest::Response) -> ApiResult<HttpResponse> {
        let ok = response.status().is_success();
        let body = match response.json::<Value>().await {
            Ok(value) => value,
            // A success response must carry valid JSON; error responses may
            // not (proxies, HTML error pages), keep the status and move on.
            Err(e) if ok => return Err(e.into()),
            Err(_) => Value::Null,
        };
        Ok(HttpResponse { ok, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> ApiResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> ApiResult<HttpResponse> {
        let response = self.client.post(url).json(body).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_builds() {
        assert!(HttpTransport::new().is_ok());
    }
}
