// Configuration type definitions

use serde::Deserialize;

/// Default chat-completions endpoint
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for both oracle calls
const DEFAULT_MODEL: &str = "gpt-4o";

/// Default suggestion debounce window in milliseconds
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Oracle configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    /// API key; `PROMPTMAGIC_API_KEY` overrides this when set
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Inline-suggestion configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.oracle.api_key.is_none());
        assert_eq!(config.oracle.model, DEFAULT_MODEL);
        assert_eq!(config.oracle.endpoint, DEFAULT_ENDPOINT);
        assert!(config.suggest.enabled);
        assert_eq!(config.suggest.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[oracle]
api_key = "sk-test"
model = "gpt-4o-mini"
endpoint = "https://relay.example/v1/chat/completions"

[suggest]
enabled = false
debounce_ms = 500

[clipboard]
backend = "osc52"
"#,
        )
        .unwrap();

        assert_eq!(config.oracle.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.oracle.model, "gpt-4o-mini");
        assert!(!config.suggest.enabled);
        assert_eq!(config.suggest.debounce_ms, 500);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
    }

    #[test]
    fn test_invalid_backend_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[clipboard]\nbackend = \"teleport\"\n");
        assert!(result.is_err());
    }

    // For any combination of present/missing sections, parsing succeeds and
    // missing fields take their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_sections_use_defaults(
            include_oracle in prop::bool::ANY,
            include_suggest in prop::bool::ANY,
            debounce_ms in 50u64..5000u64,
        ) {
            let mut toml_content = String::new();
            if include_oracle {
                toml_content.push_str("[oracle]\nmodel = \"m\"\n");
            }
            if include_suggest {
                toml_content.push_str(&format!("[suggest]\ndebounce_ms = {}\n", debounce_ms));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            if include_oracle {
                prop_assert_eq!(&config.oracle.model, "m");
            } else {
                prop_assert_eq!(&config.oracle.model, DEFAULT_MODEL);
            }
            // Endpoint was never specified, so it always defaults
            prop_assert_eq!(&config.oracle.endpoint, DEFAULT_ENDPOINT);

            if include_suggest {
                prop_assert_eq!(config.suggest.debounce_ms, debounce_ms);
            } else {
                prop_assert_eq!(config.suggest.debounce_ms, DEFAULT_DEBOUNCE_MS);
            }
            prop_assert!(config.suggest.enabled);
        }
    }
}
