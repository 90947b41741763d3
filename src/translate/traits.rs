//! Translator trait and types

use async_trait::async_trait;
use thiserror::Error;

/// Language code asking the service to detect the language itself
pub const AUTO: &str = "auto";

/// Language code of the pipeline's working language
pub const ENGLISH: &str = "en";

/// Errors raised by a translation service
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(String),

    #[error("translation service returned HTTP {0}")]
    Status(u16),

    #[error("unexpected translation response: {0}")]
    Malformed(String),
}

/// Output of a translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Source language detected by the service, when it reports one
    pub detected_source: Option<String>,
}

impl Translation {
    /// A translation that leaves the text untouched
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_source: None,
        }
    }
}

/// A text translation service
#[async_trait]
pub trait Translator: Send + Sync {
    /// Service name, used in logs
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target`; either code may be [`AUTO`]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError>;
}
