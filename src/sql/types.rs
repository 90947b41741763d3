//! Query result types

use rusqlite::types::ValueRef;
use std::borrow::Cow;
use std::fmt;

/// A single column value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Literal notation used when the result is shown to the language model
    ///
    /// Text is single-quoted, numbers are bare, NULL is `None`. Text longer
    /// than `max_chars` is shortened with [`truncate`].
    pub fn literal(&self, max_chars: usize) -> String {
        match self {
            SqlValue::Null => "None".to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Real(r) => format!("{:?}", r),
            SqlValue::Text(s) => {
                let s = truncate(s, max_chars);
                format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            SqlValue::Blob(b) => format!("<blob {} bytes>", b.len()),
        }
    }
}

/// Plain cell text
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => Ok(()),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Real(r) => write!(f, "{}", r),
            SqlValue::Text(s) => f.write_str(s),
            SqlValue::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

impl From<ValueRef<'_>> for SqlValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(i) => SqlValue::Integer(i),
            ValueRef::Real(r) => SqlValue::Real(r),
            ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        SqlValue::Integer(i)
    }
}

impl From<f64> for SqlValue {
    fn from(r: f64) -> Self {
        SqlValue::Real(r)
    }
}

/// Shorten `text` to at most `max_chars` characters plus `...`
///
/// The cut falls back to the last whitespace so words stay whole.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    let cut = match text.char_indices().nth(max_chars) {
        Some((at, _)) => at,
        None => return Cow::Borrowed(text),
    };

    let head = &text[..cut];
    let head = match head.rfind(char::is_whitespace) {
        Some(at) if at > 0 => &head[..at],
        _ => head,
    };
    Cow::Owned(format!("{}...", head))
}

/// Rows returned by a statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Column names, in select order
    pub columns: Vec<String>,
    /// Row values, positionally matching `columns`
    pub rows: Vec<Vec<SqlValue>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Render rows as a list of tuples, e.g. `[('Data Intern', 500)]`
    ///
    /// Text values are cut at `max_chars`. An empty result renders as the
    /// empty string.
    pub fn render(&self, max_chars: usize) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let values: Vec<String> = row.iter().map(|v| v.literal(max_chars)).collect();
                if values.len() == 1 {
                    format!("({},)", values[0])
                } else {
                    format!("({})", values.join(", "))
                }
            })
            .collect();

        format!("[{}]", rows.join(", "))
    }
}
