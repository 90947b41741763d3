//! Question-to-SQL generation

use super::PipelineError;
use crate::llm::{prompts, LanguageModel};
use crate::sql::QueryExecutor;
use std::sync::Arc;

/// Asks the language model to write SQL for the internship database
pub struct QueryChain {
    llm: Arc<dyn LanguageModel>,
    db: Arc<dyn QueryExecutor>,
    top_k: usize,
}

impl QueryChain {
    pub fn new(llm: Arc<dyn LanguageModel>, db: Arc<dyn QueryExecutor>, top_k: usize) -> Self {
        Self { llm, db, top_k }
    }

    /// Raw model output for `question`, schema included in the prompt
    pub async fn write_query(&self, question: &str) -> Result<String, PipelineError> {
        let table_info = self.db.table_info().await?;
        let prompt = prompts::sql_query(question, &table_info, self.top_k);
        Ok(self
            .llm
            .complete(&prompt, &[prompts::SQL_RESULT_STOP])
            .await?)
    }
}

/// Pull the statement out of the model output
///
/// Takes the text after the last query marker, or the whole output when the
/// marker is missing, trimmed either way.
pub fn extract_sql(generated: &str) -> &str {
    let marker = prompts::SQL_QUERY_MARKER;
    let sql = match generated.rfind(marker) {
        Some(at) => &generated[at + marker.len()..],
        None => generated,
    };
    sql.trim()
}
