//! Language model trait and errors

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a language model backend
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("language model request failed: {0}")]
    Request(String),

    #[error("language model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected language model response: {0}")]
    Malformed(String),

    #[error("language model returned an empty response")]
    EmptyResponse,
}

/// A text completion backend
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Model name, used in logs
    fn name(&self) -> &str;

    /// Complete `prompt`, stopping before any of the `stop` sequences
    async fn complete(&self, prompt: &str, stop: &[&str]) -> Result<String, LlmError>;
}
