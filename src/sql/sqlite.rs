//! SQLite-backed query executor

use super::traits::*;
use super::types::{truncate, QueryResult, SqlValue};
use crate::config::DatabaseSettings;
use async_trait::async_trait;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// The internship database
#[derive(Clone)]
pub struct SqliteDatabase {
    conn: Arc<Mutex<Connection>>,
    sample_rows: usize,
    sample_value_chars: usize,
}

impl SqliteDatabase {
    /// Open the database file named in the settings, read-only
    pub fn open(settings: &DatabaseSettings) -> Result<Self, SqlError> {
        let db = Self::open_path(&settings.path, settings.sample_rows)?
            .with_sample_value_chars(settings.sample_value_chars);
        info!("Opened database {}", settings.path.display());
        Ok(db)
    }

    /// Open an existing database file read-only
    pub fn open_path(path: &Path, sample_rows: usize) -> Result<Self, SqlError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            sample_rows,
            sample_value_chars: 100,
        })
    }

    /// Set the longest sample value shown in the table description
    pub fn with_sample_value_chars(mut self, chars: usize) -> Self {
        self.sample_value_chars = chars;
        self
    }

    /// Run a closure against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> Result<T, SqlError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, SqlError> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| SqlError::Task("connection lock poisoned".to_string()))?;
            f(&conn)
        })
        .await
        .map_err(|e| SqlError::Task(e.to_string()))?
    }
}

/// Execute a statement and collect all rows
fn run_statement(conn: &Connection, sql: &str) -> Result<QueryResult, SqlError> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = columns.len();

    let mut rows = stmt.query([])?;
    let mut collected = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(SqlValue::from(row.get_ref(i)?));
        }
        collected.push(values);
    }

    Ok(QueryResult::new(columns, collected))
}

/// Describe every user table: its `CREATE TABLE` statement and a few sample rows
fn describe_tables(
    conn: &Connection,
    sample_rows: usize,
    max_chars: usize,
) -> Result<String, SqlError> {
    let mut stmt = conn.prepare(
        "SELECT name, sql FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let tables = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut blocks = Vec::with_capacity(tables.len());
    for (name, create) in tables {
        let mut block = create.unwrap_or_default().trim().to_string();

        if sample_rows > 0 {
            let sample = run_statement(
                conn,
                &format!(
                    "SELECT * FROM \"{}\" LIMIT {}",
                    name.replace('"', "\"\""),
                    sample_rows
                ),
            )?;
            let mut lines = vec![sample.columns.join("\t")];
            for row in &sample.rows {
                let cells: Vec<String> = row
                    .iter()
                    .map(|v| truncate(&v.to_string(), max_chars).into_owned())
                    .collect();
                lines.push(cells.join("\t"));
            }
            block.push_str(&format!(
                "\n\n/*\n{} rows from {} table:\n{}\n*/",
                sample_rows,
                name,
                lines.join("\n")
            ));
        }

        blocks.push(block);
    }

    Ok(blocks.join("\n\n"))
}

#[async_trait]
impl QueryExecutor for SqliteDatabase {
    async fn table_info(&self) -> Result<String, SqlError> {
        let (sample_rows, max_chars) = (self.sample_rows, self.sample_value_chars);
        self.with_conn(move |conn| describe_tables(conn, sample_rows, max_chars))
            .await
    }

    async fn run(&self, sql: &str) -> Result<QueryResult, SqlError> {
        let sql = sql.to_string();
        let result = self.with_conn(move |conn| run_statement(conn, &sql)).await?;
        debug!("Query returned {} rows", result.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_db() -> (TempDir, SqliteDatabase) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("internship.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE internships (title TEXT, link TEXT, stipend INTEGER);
             INSERT INTO internships VALUES ('Data Intern', 'http://x.com/1', 500);
             INSERT INTO internships VALUES ('Web Intern', 'http://x.com/2', 1500);
             INSERT INTO internships VALUES ('ML Intern', 'http://x.com/3', 800);
             INSERT INTO internships VALUES ('Ops Intern', 'http://x.com/4', 2000);",
        )
        .unwrap();
        drop(conn);

        let db = SqliteDatabase::open_path(&path, 3).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_run_collects_rows_in_order() {
        let (_dir, db) = seeded_db();
        let result = db
            .run("SELECT title, link, stipend FROM internships WHERE stipend < 1000 ORDER BY stipend")
            .await
            .unwrap();

        assert_eq!(result.columns, vec!["title", "link", "stipend"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.rows[0][0], SqlValue::from("Data Intern"));
        assert_eq!(result.rows[0][2], SqlValue::Integer(500));
        assert_eq!(result.rows[1][1], SqlValue::from("http://x.com/3"));
    }

    #[tokio::test]
    async fn test_invalid_sql_is_an_error() {
        let (_dir, db) = seeded_db();
        let err = db.run("SELECT * FROM vacancies").await.unwrap_err();
        assert!(err.to_string().contains("no such table: vacancies"));
    }

    #[tokio::test]
    async fn test_database_is_read_only() {
        let (_dir, db) = seeded_db();
        let err = db
            .run("DELETE FROM internships")
            .await
            .unwrap_err();
        assert!(matches!(err, SqlError::Sqlite(_)));

        let count = db.run("SELECT COUNT(*) FROM internships").await.unwrap();
        assert_eq!(count.rows[0][0], SqlValue::Integer(4));
    }

    #[tokio::test]
    async fn test_table_info_has_schema_and_samples() {
        let (_dir, db) = seeded_db();
        let info = db.table_info().await.unwrap();

        assert!(info.starts_with("CREATE TABLE internships"));
        assert!(info.contains("3 rows from internships table:"));
        assert!(info.contains("title\tlink\tstipend"));
        assert!(info.contains("ML Intern\thttp://x.com/3\t800"));
        assert!(!info.contains("Ops Intern"));
    }

    #[tokio::test]
    async fn test_table_info_shortens_long_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("internship.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE internships (title TEXT, description TEXT);
             INSERT INTO internships VALUES ('Data Intern', 'Clean and chart weekly sales figures for the regional team');",
        )
        .unwrap();
        drop(conn);

        let db = SqliteDatabase::open_path(&path, 3)
            .unwrap()
            .with_sample_value_chars(20);
        let info = db.table_info().await.unwrap();

        assert!(info.contains("Data Intern\tClean and chart...\n"));
        assert!(!info.contains("weekly sales"));
    }

    #[test]
    fn test_missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SqliteDatabase::open_path(&dir.path().join("absent.db"), 3).is_err());
    }
}
