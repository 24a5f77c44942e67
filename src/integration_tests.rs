//! End-to-end tests against a real LibreTranslate server
//!
//! These are `#[ignore]`d by default because they need a running backend.
//!
//! # Running
//!
//! ```bash
//! export LIBRETRANSLATE_URL=http://localhost:5000
//! cargo test --lib integration_tests -- --ignored --nocapture
//! ```
//!
//! An API key can be supplied via `LIBRETRANSLATE_API_KEY` when the instance
//! requires one.

#[cfg(test)]
mod tests {
    use crate::LibreClient;

    /// Skip test if no server address is configured
    fn server_url() -> Option<String> {
        std::env::var("LIBRETRANSLATE_URL").ok()
    }

    fn client() -> Option<LibreClient> {
        let url = match server_url() {
            Some(url) => url,
            None => {
                eprintln!("Skipping: LIBRETRANSLATE_URL not set");
                return None;
            }
        };
        let api_key = std::env::var("LIBRETRANSLATE_API_KEY").ok();
        Some(LibreClient::new(&url, api_key).expect("valid server URL"))
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_server_lists_languages() {
        let Some(client) = client() else { return };

        let first = client.languages().await.unwrap();
        assert!(!first.is_empty());
        assert!(first.iter().any(|l| l.code == "en"));

        // second call must come from the cache and match structurally
        let second = client.languages().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_server_settings() {
        let Some(client) = client() else { return };

        let settings = client.settings().await.unwrap();
        println!(
            "debounce timeout: {}ms, char limit: {}",
            settings.ui_debounce_timeout_ms, settings.character_limit
        );
        assert!(!settings.default_language_pair.target.code.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_server_translates() {
        let Some(client) = client() else { return };

        let translated = client.translate("Hello", "en", "fr").await.unwrap();
        println!("Hello → {}", translated);
        assert!(!translated.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_server_detects_language() {
        let Some(client) = client() else { return };

        let guesses = client.detect("Good morning, how are you?").await.unwrap();
        assert!(!guesses.is_empty());
        println!("detected: {:?}", guesses);
    }

    #[tokio::test]
    #[ignore]
    async fn test_real_server_rejects_unknown_language() {
        let Some(client) = client() else { return };

        let result = client.translate("Hello", "en", "zz").await;
        assert!(result.is_err());
        println!("error: {}", result.unwrap_err());
    }
}
