//! Tests for the chat-completions client

use super::*;
use crate::config::OracleConfig;
use serde_json::json;

#[test]
fn test_extract_content_happy_path() {
    let payload = json!({
        "choices": [
            { "message": { "role": "assistant", "content": "  short poem " } }
        ]
    });
    assert_eq!(extract_content(&payload), "short poem");
}

#[test]
fn test_extract_content_missing_choices_is_empty() {
    assert_eq!(extract_content(&json!({})), "");
}

#[test]
fn test_extract_content_missing_content_is_empty() {
    let payload = json!({
        "choices": [ { "message": { "role": "assistant" } } ]
    });
    assert_eq!(extract_content(&payload), "");
}

#[test]
fn test_extract_content_null_content_is_empty() {
    let payload = json!({
        "choices": [ { "message": { "content": null } } ]
    });
    assert_eq!(extract_content(&payload), "");
}

#[test]
fn test_from_config_requires_api_key() {
    let config = OracleConfig::default();
    let result = OracleClient::from_config(&config);
    assert!(matches!(result, Err(OracleError::NotConfigured(_))));
}

#[test]
fn test_from_config_rejects_blank_api_key() {
    let config = OracleConfig {
        api_key: Some("   ".to_string()),
        ..OracleConfig::default()
    };
    assert!(matches!(
        OracleClient::from_config(&config),
        Err(OracleError::NotConfigured(_))
    ));
}

#[test]
fn test_from_config_with_key_succeeds() {
    let config = OracleConfig {
        api_key: Some("sk-test".to_string()),
        ..OracleConfig::default()
    };
    let client = OracleClient::from_config(&config).unwrap();
    assert!(format!("{:?}", client).contains("sk-test"));
}
