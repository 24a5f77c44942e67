//! Wire data model for the LibreTranslate JSON API
//!
//! Field names follow the backend's camelCase contract via serde renames; the
//! Rust side uses descriptive snake_case names. All of these are supplied by
//! the backend and read-only to this crate.

use serde::{Deserialize, Serialize};

/// One language guess from the `/detect` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detection confidence, 0-100
    pub confidence: f64,
    /// ISO 639 language code (e.g. "en")
    pub language: String,
}

impl Detection {
    /// Fallback guess returned for empty input without a network call
    pub fn fallback() -> Self {
        Detection {
            confidence: 0.0,
            language: "en".to_string(),
        }
    }
}

/// One source language and the target codes it may translate into,
/// as listed by the `/languages` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639 language code
    pub code: String,
    /// Human-readable language name
    pub name: String,
    /// Codes this language can be translated into
    #[serde(default)]
    pub targets: Vec<String>,
}

/// A language reference inside the settings' default pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRef {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// Default source/target selection advertised by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: LanguageRef,
    pub target: LanguageRef,
}

/// Frontend settings from `/frontend/settings`
///
/// Fetched once and cached for the lifetime of the client. The wire key
/// `supportedFilesFormat` is misspelled upstream; it is exposed here under the
/// intended name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatorSettings {
    /// Whether the backend rejects calls without an API key
    #[serde(rename = "keyRequired", default)]
    pub api_key_required: bool,
    /// Maximum characters per request; -1 means unlimited
    #[serde(rename = "charLimit", default = "unlimited")]
    pub character_limit: i64,
    /// Debounce quiet period the frontend should apply to input, in ms
    #[serde(rename = "frontendTimeout", default)]
    pub ui_debounce_timeout_ms: u64,
    /// Whether the backend accepts translation suggestions
    #[serde(rename = "suggestions", default)]
    pub suggestions_enabled: bool,
    /// Initial source/target selection for a fresh frontend
    #[serde(rename = "language")]
    pub default_language_pair: LanguagePair,
    /// File extensions accepted by the file-translation endpoint
    #[serde(rename = "supportedFilesFormat", default)]
    pub supported_file_formats: Vec<String>,
}

fn unlimited() -> i64 {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detection_fallback() {
        let guess = Detection::fallback();
        assert_eq!(guess.language, "en");
        assert_eq!(guess.confidence, 0.0);
    }

    #[test]
    fn test_language_list_deserializes() {
        let payload = json!([
            { "code": "en", "name": "English", "targets": ["fr", "es"] },
            { "code": "fr", "name": "French", "targets": ["en"] }
        ]);
        let languages: Vec<Language> = serde_json::from_value(payload).unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].code, "en");
        assert_eq!(languages[0].targets, vec!["fr", "es"]);
    }

    #[test]
    fn test_language_missing_targets_defaults_empty() {
        let payload = json!({ "code": "eo", "name": "Esperanto" });
        let language: Language = serde_json::from_value(payload).unwrap();
        assert!(language.targets.is_empty());
    }

    #[test]
    fn test_settings_deserialize_wire_names() {
        // Shape served by a real LibreTranslate instance, misspelling included
        let payload = json!({
            "apiKeys": false,
            "charLimit": 5000,
            "frontendTimeout": 500,
            "keyRequired": true,
            "language": {
                "source": { "code": "auto", "name": "Auto Detect" },
                "target": { "code": "en", "name": "English" }
            },
            "suggestions": true,
            "supportedFilesFormat": [".txt", ".odt"]
        });
        let settings: TranslatorSettings = serde_json::from_value(payload).unwrap();
        assert!(settings.api_key_required);
        assert_eq!(settings.character_limit, 5000);
        assert_eq!(settings.ui_debounce_timeout_ms, 500);
        assert!(settings.suggestions_enabled);
        assert_eq!(settings.default_language_pair.source.code, "auto");
        assert_eq!(settings.default_language_pair.target.code, "en");
        assert_eq!(settings.supported_file_formats, vec![".txt", ".odt"]);
    }

    #[test]
    fn test_settings_char_limit_defaults_to_unlimited() {
        let payload = json!({
            "language": {
                "source": { "code": "en", "name": "English" },
                "target": { "code": "fr", "name": "French" }
            }
        });
        let settings: TranslatorSettings = serde_json::from_value(payload).unwrap();
        assert_eq!(settings.character_limit, -1);
        assert!(!settings.api_key_required);
        assert!(settings.supported_file_formats.is_empty());
    }
}
