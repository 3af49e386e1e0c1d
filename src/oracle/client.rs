//! Chat-completions HTTP client

use serde_json::{Value, json};

use super::OracleError;
use super::prompts;
use crate::config::OracleConfig;

/// Client for an OpenAI-style chat-completions endpoint
#[derive(Debug, Clone)]
pub struct OracleClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OracleClient {
    /// Create a client from explicit parts
    pub fn new(api_key: String, model: String, endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            endpoint,
        }
    }

    /// Create a client from configuration
    ///
    /// Returns `NotConfigured` when the API key is missing or blank.
    pub fn from_config(config: &OracleConfig) -> Result<Self, OracleError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                OracleError::NotConfigured(
                    "missing API key; set [oracle] api_key or PROMPTMAGIC_API_KEY".to_string(),
                )
            })?;

        Ok(Self::new(
            api_key.clone(),
            config.model.clone(),
            config.endpoint.clone(),
        ))
    }

    /// Request a short inline continuation of `text`
    pub async fn complete(&self, text: &str) -> Result<String, OracleError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompts::COMPLETE_SYSTEM },
                { "role": "user", "content": prompts::complete_instruction(text) },
            ],
            "max_tokens": prompts::COMPLETE_MAX_TOKENS,
            "temperature": prompts::COMPLETE_TEMPERATURE,
            "n": 1,
            "stop": prompts::COMPLETE_STOP,
        });
        self.chat(body).await
    }

    /// Request a full rewrite of the draft prompt `text`
    pub async fn refine(&self, text: &str) -> Result<String, OracleError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompts::REFINE_SYSTEM },
                { "role": "user", "content": prompts::refine_instruction(text) },
            ],
            "max_tokens": prompts::REFINE_MAX_TOKENS,
            "temperature": prompts::REFINE_TEMPERATURE,
        });
        self.chat(body).await
    }

    /// POST a chat request and extract the first choice's content
    async fn chat(&self, body: Value) -> Result<String, OracleError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(OracleError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;
        Ok(extract_content(&payload))
    }
}

/// Pull the assistant text out of a chat-completions payload
///
/// A payload without content is an empty result, not an error; the caller
/// treats an empty string as "no suggestion available".
fn extract_content(payload: &Value) -> String {
    payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
