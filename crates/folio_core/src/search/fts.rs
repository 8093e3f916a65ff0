//! SQLite FTS5-backed search provider.
//!
//! # Responsibility
//! - Run keyword search over the indexed page table.
//! - Return typed documents with stable URLs and highlighted snippets.
//!
//! # Invariants
//! - Blank queries never touch the index.
//! - Result ordering is deterministic: bm25 rank, then URL.

use rusqlite::{params, Connection, Row};

use super::provider::{SearchDoc, SearchError, SearchProvider, SearchResult};

const DEFAULT_RESULT_LIMIT: u32 = 20;

/// Search provider over a migrated page-index connection.
pub struct FtsSearchProvider<'conn> {
    conn: &'conn Connection,
    limit: u32,
}

impl<'conn> FtsSearchProvider<'conn> {
    /// Wraps an index connection with the default result limit.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Overrides the maximum number of documents returned per search.
    pub fn with_limit(conn: &'conn Connection, limit: u32) -> Self {
        Self { conn, limit }
    }

    /// Runs a caller-supplied raw FTS5 expression, without term quoting.
    ///
    /// Exists for advanced query input; unlike [`SearchProvider::search`],
    /// syntax errors in the expression surface as
    /// [`SearchError::InvalidQuery`] instead of being escaped away.
    pub fn search_expression(&self, expr: &str) -> SearchResult<Vec<SearchDoc>> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        self.run_match_query(trimmed)
    }

    fn run_match_query(&self, match_expr: &str) -> SearchResult<Vec<SearchDoc>> {
        if self.limit == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(
            "SELECT
                pages.url AS url,
                pages.title AS title,
                snippet(pages_fts, 1, '[', ']', ' ... ', 10) AS snippet,
                pages.image AS image
             FROM pages_fts
             JOIN pages ON pages.rowid = pages_fts.rowid
             WHERE pages_fts MATCH ?1
             ORDER BY bm25(pages_fts), pages.url ASC
             LIMIT ?2",
        )?;

        let mut rows = stmt
            .query(params![match_expr, i64::from(self.limit)])
            .map_err(|err| map_query_error(err, match_expr))?;
        let mut docs = Vec::new();

        while let Some(row) = rows
            .next()
            .map_err(|err| map_query_error(err, match_expr))?
        {
            docs.push(parse_doc_row(row)?);
        }

        Ok(docs)
    }
}

impl SearchProvider for FtsSearchProvider<'_> {
    fn search(&self, query: &str) -> SearchResult<Vec<SearchDoc>> {
        let Some(match_expr) = build_match_expression(query) else {
            return Ok(Vec::new());
        };
        self.run_match_query(&match_expr)
    }
}

fn parse_doc_row(row: &Row<'_>) -> SearchResult<SearchDoc> {
    Ok(SearchDoc {
        url: row.get("url")?,
        title: row.get("title")?,
        snippet: row.get("snippet")?,
        image: row.get("image")?,
    })
}

/// Turns free text into a safe FTS5 expression: each whitespace-separated
/// term is quoted (protecting type-as-you-search input from FTS syntax) and
/// terms are AND-joined. Returns `None` for blank input.
fn build_match_expression(query: &str) -> Option<String> {
    let text = query.trim();
    if text.is_empty() {
        return None;
    }

    let terms = text
        .split_whitespace()
        .map(escape_fts_term)
        .collect::<Vec<_>>();

    if terms.is_empty() {
        return None;
    }

    Some(terms.join(" AND "))
}

fn escape_fts_term(raw: &str) -> String {
    let escaped = raw.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

fn map_query_error(err: rusqlite::Error, query: &str) -> SearchError {
    if is_match_syntax_error(&err) {
        return SearchError::InvalidQuery {
            query: query.to_string(),
            message: err.to_string(),
        };
    }

    err.into()
}

fn is_match_syntax_error(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) => {
            let msg = message.to_lowercase();
            (msg.contains("fts5") && msg.contains("syntax"))
                || msg.contains("malformed match expression")
                || msg.contains("unterminated")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::build_match_expression;

    #[test]
    fn terms_are_quoted_and_joined() {
        assert_eq!(
            build_match_expression("rust async").as_deref(),
            Some("\"rust\" AND \"async\"")
        );
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(
            build_match_expression("a\"b").as_deref(),
            Some("\"a\"\"b\"")
        );
    }

    #[test]
    fn blank_input_yields_no_expression() {
        assert_eq!(build_match_expression("   "), None);
    }
}
