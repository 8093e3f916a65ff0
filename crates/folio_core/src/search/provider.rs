//! Search provider contract shared by index implementations.
//!
//! # Responsibility
//! - Define the document shape handed back to the rendering layer.
//! - Define the error surface for query parsing and index access.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for query parsing, index access and result decoding.
#[derive(Debug)]
pub enum SearchError {
    /// User-provided query cannot be parsed by the index syntax.
    InvalidQuery { query: String, message: String },
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery { query, message } => {
                write!(f, "invalid full-text query `{query}`: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidQuery { .. } => None,
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One indexed page returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDoc {
    /// Canonical page URL, e.g. `/writing/first-post`.
    pub url: String,
    pub title: String,
    /// Highlighted context around the match.
    pub snippet: String,
    /// Optional cover image path.
    pub image: Option<String>,
}

/// Full-text index abstraction consumed by [`crate::search::SearchBox`].
///
/// Implementations own result ordering; callers treat the sequence as-is.
/// Blank queries must return an empty list without touching the index.
pub trait SearchProvider {
    fn search(&self, query: &str) -> SearchResult<Vec<SearchDoc>>;
}
