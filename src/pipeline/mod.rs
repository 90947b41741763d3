//! Question answering pipeline
//!
//! A question is translated to English, turned into SQL by the language
//! model, run against the internship database, summarized by the model and
//! translated back. Every failure along the way is reported as the answer.

mod orchestrator;
mod query_chain;
pub mod table;
#[cfg(test)]
pub(crate) mod testing;

pub use orchestrator::{Answer, Orchestrator, ERROR_PREFIX};
pub use query_chain::{extract_sql, QueryChain};

use crate::llm::LlmError;
use crate::sql::SqlError;
use crate::translate::TranslateError;
use thiserror::Error;

/// Any failure inside the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Sql(#[from] SqlError),
}
