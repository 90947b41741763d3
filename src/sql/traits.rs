//! Query executor trait and errors

use super::types::QueryResult;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while talking to the database
#[derive(Debug, Error)]
pub enum SqlError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database task failed: {0}")]
    Task(String),
}

/// A database the pipeline can describe and query
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Schema description handed to the query-writing prompt
    async fn table_info(&self) -> Result<String, SqlError>;

    /// Run a statement verbatim and collect every row
    async fn run(&self, sql: &str) -> Result<QueryResult, SqlError>;
}
