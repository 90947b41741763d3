//! Database access
//!
//! Generated statements are run verbatim; nothing here inspects or rewrites
//! the SQL. The connection is opened read-only.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteDatabase;
pub use traits::*;
pub use types::{truncate, QueryResult, SqlValue};
