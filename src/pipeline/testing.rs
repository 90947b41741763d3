//! In-memory collaborators for pipeline tests

use crate::llm::{LanguageModel, LlmError};
use crate::sql::{QueryExecutor, QueryResult, SqlError};
use crate::translate::{TranslateError, Translation, Translator, ENGLISH};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Returns queued responses in order and records every prompt
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(prompt, stop sequences)` per call
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &str, stop: &[&str]) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push((
            prompt.to_string(),
            stop.iter().map(|s| s.to_string()).collect(),
        ));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// Serves a fixed schema and a single canned result
pub struct FakeDatabase {
    table_info: String,
    result: Mutex<Option<Result<QueryResult, SqlError>>>,
    queries: Mutex<Vec<String>>,
}

impl FakeDatabase {
    pub fn new(table_info: &str, result: Result<QueryResult, SqlError>) -> Self {
        Self {
            table_info: table_info.to_string(),
            result: Mutex::new(Some(result)),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for FakeDatabase {
    async fn table_info(&self) -> Result<String, SqlError> {
        Ok(self.table_info.clone())
    }

    async fn run(&self, sql: &str) -> Result<QueryResult, SqlError> {
        self.queries.lock().unwrap().push(sql.to_string());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(QueryResult::default()))
    }
}

/// Translates by table lookup; unknown text passes through unchanged
///
/// Text translated to English reports `detected` as its source language.
pub struct FakeTranslator {
    pairs: Vec<(String, String)>,
    detected: Option<String>,
    fail: bool,
    fail_outbound: bool,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeTranslator {
    /// Every call returns its input
    pub fn identity() -> Self {
        Self {
            pairs: Vec::new(),
            detected: Some(ENGLISH.to_string()),
            fail: false,
            fail_outbound: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(foreign, english)` pairs translated in both directions
    pub fn with_pairs(detected: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            detected: Some(detected.to_string()),
            fail: false,
            fail_outbound: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Like [`FakeTranslator::with_pairs`] but no source language is detected
    pub fn undetected(pairs: &[(&str, &str)]) -> Self {
        Self {
            detected: None,
            ..Self::with_pairs(ENGLISH, pairs)
        }
    }

    /// Every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::identity()
        }
    }

    /// Translating to English works; translating the answer back fails
    pub fn failing_outbound(detected: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            fail_outbound: true,
            ..Self::with_pairs(detected, pairs)
        }
    }

    /// `(text, source, target)` per call
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    fn name(&self) -> &str {
        "fake"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source.to_string(), target.to_string()));

        if self.fail || (self.fail_outbound && target != ENGLISH) {
            return Err(TranslateError::Status(503));
        }

        if target == ENGLISH {
            let text = self
                .pairs
                .iter()
                .find(|(foreign, _)| foreign == text)
                .map(|(_, english)| english.clone())
                .unwrap_or_else(|| text.to_string());
            return Ok(Translation {
                text,
                detected_source: self.detected.clone(),
            });
        }

        let text = self
            .pairs
            .iter()
            .find(|(_, english)| english == text)
            .map(|(foreign, _)| foreign.clone())
            .unwrap_or_else(|| text.to_string());
        Ok(Translation::unchanged(text))
    }
}
