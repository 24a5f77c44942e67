//! Async client for the LibreTranslate HTTP API
//!
//! This crate packages the pieces a translation frontend needs:
//!
//! 1. **Client** — [`LibreClient`]: language detection, language listing,
//!    frontend settings and translation against a configurable backend, with
//!    read-only responses cached for the lifetime of the client.
//! 2. **Debouncer** — [`debounce`]: collapses bursts of input events into a
//!    single trailing call, so a user typing does not flood the backend.
//! 3. **Transport seam** — [`Transport`] with a reqwest-backed
//!    [`HttpTransport`] and a deterministic [`MockTransport`] for tests and
//!    offline use.
//!
//! # Example
//!
//! ```ignore
//! use libretranslate_client::{LibreClient, debounce};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(LibreClient::new("http://localhost:5000", None)?);
//!
//!     let settings = client.settings().await?;
//!     let worker = client.clone();
//!     let on_input = debounce(
//!         move |text: String| {
//!             let client = worker.clone();
//!             async move {
//!                 if let Ok(translated) = client.translate(&text, "en", "fr").await {
//!                     println!("{}", translated);
//!                 }
//!             }
//!         },
//!         Duration::from_millis(settings.ui_debounce_timeout_ms),
//!     );
//!
//!     on_input.trigger("Hello".to_string());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod debounce;
pub mod error;
pub mod mock;
pub mod transport;
pub mod types;

#[cfg(test)]
mod integration_tests;

pub use client::{DEFAULT_BASE_URL, LibreClient};
pub use debounce::{Debounced, debounce};
pub use error::{ApiError, ApiResult};
pub use mock::{MockTransport, RecordedRequest};
pub use transport::{HttpResponse, HttpTransport, Transport};
pub use types::{Detection, Language, LanguagePair, LanguageRef, TranslatorSettings};
