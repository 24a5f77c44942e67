//! Mock transport for testing
//!
//! A deterministic, network-free `Transport` implementation. Responses are
//! canned per endpoint, every request is recorded so tests can assert call
//! counts and bodies, and a simulated delay can stand in for network latency.
//!
//! # Example
//!
//! ```ignore
//! let mock = MockTransport::new()
//!     .respond("/languages", json!([{ "code": "en", "name": "English", "targets": ["fr"] }]));
//! let client = LibreClient::with_transport("http://localhost:5000", None, Arc::new(mock))?;
//! ```

use crate::error::ApiResult;
use crate::transport::{HttpResponse, Transport};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// One request observed by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// "GET" or "POST"
    pub method: &'static str,
    /// Full resolved URL the client asked for
    pub url: String,
    /// JSON body for POST requests, `None` for GETs
    pub body: Option<Value>,
}

/// Canned-response transport
///
/// Routes are keyed by endpoint path suffix (e.g. `"/languages"`,
/// `"/frontend/settings"`); the longest suffix matching the requested URL
/// wins. Queue several responses on the same route to script a sequence; the
/// last queued response repeats once the queue drains. Unmatched URLs produce
/// a failed exchange with an explanatory `error` body.
pub struct MockTransport {
    routes: Mutex<HashMap<String, VecDeque<HttpResponse>>>,
    recorded: Mutex<Vec<RecordedRequest>>,
    hits: AtomicUsize,
    delay: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            routes: Mutex::new(HashMap::new()),
            recorded: Mutex::new(Vec::new()),
            hits: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    /// Simulate network latency before every response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queue a successful JSON response for an endpoint suffix
    pub fn respond(mut self, endpoint: &str, body: Value) -> Self {
        self.queue(endpoint, HttpResponse { ok: true, body });
        self
    }

    /// Queue a failed response (non-success status) with the given body
    pub fn respond_error(mut self, endpoint: &str, body: Value) -> Self {
        self.queue(endpoint, HttpResponse { ok: false, body });
        self
    }

    fn queue(&mut self, endpoint: &str, response: HttpResponse) {
        self.routes
            .get_mut()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(response);
    }

    /// Number of requests served so far
    pub fn request_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Everything the mock has been asked, in order
    pub async fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().await.clone()
    }

    async fn serve(&self, request: RecordedRequest) -> HttpResponse {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.hits.fetch_add(1, Ordering::SeqCst);
        let url = request.url.clone();
        self.recorded.lock().await.push(request);

        let mut routes = self.routes.lock().await;
        let matched = routes
            .iter_mut()
            .filter(|(suffix, _)| url.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len());

        match matched {
            Some((_, queue)) => {
                let response = if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                };
                response.unwrap_or(HttpResponse {
                    ok: false,
                    body: Value::Null,
                })
            }
            None => HttpResponse {
                ok: false,
                body: json!({ "error": format!("no mock response for {}", url) }),
            },
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str) -> ApiResult<HttpResponse> {
        Ok(self
            .serve(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                body: None,
            })
            .await)
    }

    async fn post_json(&self, url: &str, body: &Value) -> ApiResult<HttpResponse> {
        Ok(self
            .serve(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                body: Some(body.clone()),
            })
            .await)
    }
}
