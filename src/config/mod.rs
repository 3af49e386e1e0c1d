//! Configuration loading
//!
//! Reads `<config_dir>/promptmagic/config.toml` when present; a missing file
//! is simply the default configuration, while a malformed one is an error
//! surfaced at startup. `PROMPTMAGIC_API_KEY` overrides the file's API key.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

mod types;

pub use types::{ClipboardBackend, ClipboardConfig, Config, OracleConfig, SuggestConfig};

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "PROMPTMAGIC_API_KEY";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration, preferring `path_override` over the default location
pub fn load(path_override: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path_override.map(Path::to_path_buf).or_else(default_path);

    let mut config = match path {
        Some(path) if path.exists() => {
            let raw = fs::read_to_string(&path)?;
            let config = toml::from_str(&raw)?;
            log::debug!("loaded config from {}", path.display());
            config
        }
        _ => Config::default(),
    };

    apply_env_override(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// Default config file location, if a config directory exists
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptmagic").join("config.toml"))
}

/// Apply the API-key environment override; blank values are ignored
fn apply_env_override(config: &mut Config, api_key: Option<String>) {
    if let Some(key) = api_key
        && !key.trim().is_empty()
    {
        config.oracle.api_key = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = load(Some(&path)).unwrap();
        assert!(config.suggest.enabled);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[suggest]\ndebounce_ms = 150").unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.suggest.debounce_ms, 150);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[suggest\nnot toml").unwrap();

        assert!(matches!(load(Some(&path)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_override_wins_over_file_key() {
        let mut config = Config::default();
        config.oracle.api_key = Some("from-file".to_string());
        apply_env_override(&mut config, Some("from-env".to_string()));
        assert_eq!(config.oracle.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let mut config = Config::default();
        config.oracle.api_key = Some("from-file".to_string());
        apply_env_override(&mut config, Some("   ".to_string()));
        assert_eq!(config.oracle.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_no_env_override_keeps_file_key() {
        let mut config = Config::default();
        config.oracle.api_key = Some("from-file".to_string());
        apply_env_override(&mut config, None);
        assert_eq!(config.oracle.api_key.as_deref(), Some("from-file"));
    }
}
