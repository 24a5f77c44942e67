//! LibreTranslate API client
//!
//! `LibreClient` wraps a LibreTranslate backend: language detection, language
//! listing, frontend settings and translation. Read-only endpoints are cached
//! for the lifetime of the client; mutating endpoints always hit the network
//! and forward the configured API key in the request body.
//!
//! The client is an explicitly constructed value; own it at your application
//! entry point and hand out references (or an `Arc`) to whatever needs it.
//!
//! # Example
//!
//! ```ignore
//! use libretranslate_client::LibreClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LibreClient::new("http://localhost:5000", None)?;
//!     let translated = client.translate("Hello", "en", "fr").await?;
//!     println!("{}", translated); // "Bonjour"
//!     Ok(())
//! }
//! ```

use crate::error::{ApiError, ApiResult, GENERIC_API_ERROR};
use crate::transport::{HttpResponse, HttpTransport, Transport};
use crate::types::{Detection, Language, TranslatorSettings};
use reqwest::Url;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Public LibreTranslate instance used when no base address is given
pub const DEFAULT_BASE_URL: &str = "https://libretranslate.com";

const DETECT_ENDPOINT: &str = "detect";
const LANGUAGES_ENDPOINT: &str = "languages";
const SETTINGS_ENDPOINT: &str = "/frontend/settings";
const TRANSLATE_ENDPOINT: &str = "translate";

/// Async client for a LibreTranslate backend
///
/// Configuration (base address, API key) is immutable after construction.
/// The only mutable state is the endpoint response cache, which holds the
/// last decoded payload of each read-only endpoint and never expires within
/// the client's lifetime.
pub struct LibreClient {
    base_url: Url,
    api_key: Option<String>,
    transport: Arc<dyn Transport>,
    cache: Mutex<HashMap<String, Value>>,
}

impl LibreClient {
    /// Create a client backed by a real HTTP transport
    ///
    /// `base_url` must be an absolute URL; endpoint paths are resolved
    /// against it with standard relative-reference semantics, so a base with
    /// a subpath should end in `/`.
    pub fn new(base_url: &str, api_key: Option<String>) -> ApiResult<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Self::with_transport(base_url, api_key, transport)
    }

    /// Create a client with an injected transport (mock or otherwise)
    pub fn with_transport(
        base_url: &str,
        api_key: Option<String>,
        transport: Arc<dyn Transport>,
    ) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::new(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(LibreClient {
            base_url,
            api_key,
            transport,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// The configured base address
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Detect the language of `text`
    ///
    /// Empty input short-circuits to a single fallback guess
    /// (`"en"` at confidence 0) without touching the network.
    pub async fn detect(&self, text: &str) -> ApiResult<Vec<Detection>> {
        if text.is_empty() {
            return Ok(vec![Detection::fallback()]);
        }

        let body = self.call(DETECT_ENDPOINT, json!({ "q": text })).await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::new(format!("Failed to parse detect response: {}", e)))
    }

    /// List the languages the backend supports
    ///
    /// Cache-eligible: at most one network call per client lifetime.
    pub async fn languages(&self) -> ApiResult<Vec<Language>> {
        let body = self.call_cached(LANGUAGES_ENDPOINT).await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::new(format!("Failed to parse languages response: {}", e)))
    }

    /// Fetch the backend's frontend settings
    ///
    /// Cache-eligible: at most one network call per client lifetime.
    pub async fn settings(&self) -> ApiResult<TranslatorSettings> {
        let body = self.call_cached(SETTINGS_ENDPOINT).await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::new(format!("Failed to parse settings response: {}", e)))
    }

    /// Translate `text` from `source` to `target`
    ///
    /// Empty input short-circuits to an empty result without a network call.
    /// Never cached. A success response missing `translatedText` yields an
    /// empty string rather than an error.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> ApiResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let body = self
            .call(
                TRANSLATE_ENDPOINT,
                json!({ "q": text, "source": source, "target": target }),
            )
            .await?;

        Ok(body["translatedText"].as_str().unwrap_or_default().to_string())
    }

    /// Resolve an endpoint against the base address
    ///
    /// Pure function of (base, endpoint); the result doubles as the cache key.
    fn endpoint_url(&self, endpoint: &str) -> ApiResult<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|e| ApiError::new(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    /// POST `params` to `endpoint`, forwarding the API key when configured
    async fn call(&self, endpoint: &str, params: Value) -> ApiResult<Value> {
        let url = self.endpoint_url(endpoint)?;

        let mut body = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Some(key) = &self.api_key {
            body.insert("api_key".to_string(), Value::String(key.clone()));
        }

        debug!(endpoint, "issuing API call");
        let response = self.transport.post_json(url.as_str(), &Value::Object(body)).await?;
        Self::into_payload(response)
    }

    /// GET `endpoint`, serving repeats from the session cache
    ///
    /// Only successful payloads are cached; a failure leaves the cache
    /// untouched so the next call retries.
    async fn call_cached(&self, endpoint: &str) -> ApiResult<Value> {
        let url = self.endpoint_url(endpoint)?;
        let key = url.to_string();

        if let Some(hit) = self.cache.lock().await.get(&key) {
            debug!(endpoint, "serving cached response");
            return Ok(hit.clone());
        }

        debug!(endpoint, "issuing API call");
        let response = self.transport.get_json(&key).await?;
        let payload = Self::into_payload(response)?;

        self.cache.lock().await.insert(key, payload.clone());
        Ok(payload)
    }

    /// Map a transport exchange to a payload or an API failure
    fn into_payload(response: HttpResponse) -> ApiResult<Value> {
        if response.ok {
            Ok(response.body)
        } else {
            let message = response
                .body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_API_ERROR);
            Err(ApiError::new(message))
        }
    }
}

impl std::fmt::Debug for LibreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}
