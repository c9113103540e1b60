use std::collections::HashMap;
use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Core value types for SQLite results.
///
/// One variant per SQLite storage class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Text content, if this value is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric content widened to f64, if this value is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(n) => Value::Integer(n),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

/// A single result row, keyed by column name.
pub type Row = HashMap<String, Value>;

/// Errors surfaced while executing a query.
///
/// Database failures pass through untranslated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Executes SQL against a connected catalog database.
///
/// The contract is deliberately small: given valid SQL and an
/// established connection, return every matching row, or surface the
/// database error to the caller.
pub trait QueryExecutor {
    /// Run one statement and collect all resulting rows.
    fn execute(&self, sql: &str) -> Result<Vec<Row>, Error>;
}

/// Query executor backed by a `rusqlite` connection.
pub struct SqliteExecutor {
    conn: Connection,
}

impl SqliteExecutor {
    /// Wrap an already-open connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database file at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        tracing::debug!("Opening catalog database at {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        Ok(Self::new(conn))
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::new(conn))
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl QueryExecutor for SqliteExecutor {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, Error> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let mut rows = stmt.query([])?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Row::new();
            for (idx, name) in columns.iter().enumerate() {
                record.insert(name.clone(), Value::from(row.get_ref(idx)?));
            }
            result.push(record);
        }
        tracing::debug!("Query returned {} row(s)", result.len());
        Ok(result)
    }
}
