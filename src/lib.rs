//! Read-only filmography queries over an actors/movies/castings catalog.
//!
//! # Intention
//!
//! - Expose one named operation per supported question, each running a
//!   single fixed SQL statement and returning the raw rows.
//! - Keep execution behind the small [`QueryExecutor`] seam so the query
//!   library stays independent of any one connection type.
//!
//! # Architectural Boundaries
//!
//! - The catalog schema is owned elsewhere. Nothing here creates,
//!   migrates, or writes tables.
//! - No result mapping beyond named column values; rows are consumed as
//!   the database returns them.

/// Named catalog queries over actors, movies, and castings.
pub mod queries;
/// Value model, executor seam, and the SQLite-backed executor.
pub mod sqlite;

pub use sqlite::{Error, QueryExecutor, Row, SqliteExecutor, Value};
