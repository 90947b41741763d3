//! OpenAI-compatible chat completions client (Groq by default)

use super::traits::*;
use crate::config::LlmSettings;
use crate::network::HttpClient;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Longest error body kept in [`LlmError::Status`]
const MAX_ERROR_BODY: usize = 300;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

/// Chat completion backed language model
pub struct ChatCompletionModel {
    client: HttpClient,
    url: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl ChatCompletionModel {
    pub fn new(client: HttpClient, settings: &LlmSettings) -> Self {
        Self {
            client,
            url: format!("{}/chat/completions", settings.endpoint.trim_end_matches('/')),
            model: settings.model.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
            temperature: settings.temperature,
        }
    }

    fn request_body(&self, prompt: &str, stop: &[&str]) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt},
            ],
            "temperature": self.temperature,
        });
        if !stop.is_empty() {
            body["stop"] = serde_json::json!(stop);
        }
        body
    }

    fn first_content(response: ChatResponse) -> Result<String, LlmError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl LanguageModel for ChatCompletionModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, stop: &[&str]) -> Result<String, LlmError> {
        let body = self.request_body(prompt, stop);

        let response = self
            .client
            .post_json(&self.url, &body, self.api_key.as_deref())
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        if !response.is_success() {
            let mut body = response.text;
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(LlmError::Status {
                status: response.status,
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| LlmError::Malformed(format!("failed to parse response: {}", e)))?;
        let content = Self::first_content(parsed)?;
        debug!("{} returned {} chars", self.model, content.len());
        Ok(content)
    }
}
