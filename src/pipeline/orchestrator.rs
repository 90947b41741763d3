//! Question answering pipeline

use super::query_chain::{extract_sql, QueryChain};
use super::{table, PipelineError};
use crate::conversation::{History, Turn};
use crate::llm::{prompts, LanguageModel};
use crate::sql::QueryExecutor;
use crate::translate::{Translator, AUTO, ENGLISH};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Prefix of answers produced when any step fails
pub const ERROR_PREFIX: &str = "Error occurred: ";

/// Longest text value passed to the answer prompt unless configured otherwise
const DEFAULT_MAX_VALUE_CHARS: usize = 300;

/// Result of one question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    /// Answer in the language the question was asked in, or the error report
    pub text: String,
    /// HTML table of matching internships, empty when there is none to show
    pub table: String,
}

/// Runs a question through translation, SQL generation, execution and summarization
pub struct Orchestrator {
    translator: Arc<dyn Translator>,
    llm: Arc<dyn LanguageModel>,
    db: Arc<dyn QueryExecutor>,
    chain: QueryChain,
    max_value_chars: usize,
}

impl Orchestrator {
    pub fn new(
        translator: Arc<dyn Translator>,
        llm: Arc<dyn LanguageModel>,
        db: Arc<dyn QueryExecutor>,
        top_k: usize,
    ) -> Self {
        let chain = QueryChain::new(llm.clone(), db.clone(), top_k);
        Self {
            translator,
            llm,
            db,
            chain,
            max_value_chars: DEFAULT_MAX_VALUE_CHARS,
        }
    }

    /// Set the longest text value shown to the model when summarizing
    pub fn with_max_value_chars(mut self, chars: usize) -> Self {
        self.max_value_chars = chars;
        self
    }

    /// Answer `question`, recording it and the reply in `history`
    ///
    /// Always appends exactly two turns. Failures become the answer text.
    pub async fn handle(&self, question: &str, history: &History) -> Answer {
        history.push(Turn::user(question));

        let mut table = String::new();
        let text = match self.answer(question, &mut table).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Question failed: {}", e);
                format!("{}{}", ERROR_PREFIX, e)
            }
        };

        history.push(Turn::bot(text.clone()));
        Answer { text, table }
    }

    async fn answer(&self, question: &str, table_html: &mut String) -> Result<String, PipelineError> {
        let inbound = self.translator.translate(question, AUTO, ENGLISH).await?;
        let english = inbound.text;
        info!("Answering: {}", english);

        let generated = self.chain.write_query(&english).await?;
        let sql = extract_sql(&generated);
        debug!("Generated SQL: {}", sql);

        let result = self.db.run(sql).await?;
        *table_html = table::render(&result);

        let prompt = prompts::answer(&english, &result.render(self.max_value_chars));
        let response = self.llm.complete(&prompt, &[]).await?;
        let summary = response.trim();

        let target = inbound.detected_source.as_deref().unwrap_or(AUTO);
        if target == ENGLISH {
            return Ok(summary.to_string());
        }

        let outbound = self.translator.translate(summary, ENGLISH, target).await?;
        Ok(outbound.text)
    }
}
