//! Completion oracle client
//!
//! HTTP client for an OpenAI-style chat-completions endpoint, carrying the
//! two fixed prompt templates the wizard needs: a short inline completion
//! and a full draft rewrite. The oracle is treated as opaque; this module
//! only owns the transport and the templates.

use thiserror::Error;

mod client;
mod prompts;

pub use client::OracleClient;

/// Errors that can occur during oracle calls
#[derive(Debug, Error)]
pub enum OracleError {
    /// Oracle is not configured (missing API key)
    #[error("oracle not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("network error: {0}")]
    Network(String),

    /// API returned a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the API response
    #[error("parse error: {0}")]
    Parse(String),
}
