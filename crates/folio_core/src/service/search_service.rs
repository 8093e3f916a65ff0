//! Page-index assembly for the static search index.
//!
//! # Responsibility
//! - Turn articles plus their rendered bodies into indexable page records.
//! - Write page records into the FTS-backed index.
//!
//! # Invariants
//! - Re-indexing a URL replaces its previous row; the FTS table stays in
//!   sync through the schema triggers.

use log::info;
use rusqlite::{params, Connection};

use crate::db::DbResult;
use crate::model::article::Article;

/// One page ready for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    /// Searchable text: title, tags and rendered body combined.
    pub content: String,
    pub image: Option<String>,
}

/// Builds an indexable page from an article and its rendered body text.
///
/// Tags are folded into the content so the search box matches articles by
/// title, content, or tags.
pub fn page_from_article(article: &Article, body: &str) -> PageRecord {
    let mut content = String::with_capacity(
        article.title.len() + article.excerpt.len() + body.len() + 32,
    );
    content.push_str(&article.title);
    content.push(' ');
    for tag in &article.tags {
        content.push_str(tag);
        content.push(' ');
    }
    content.push_str(&article.excerpt);
    content.push(' ');
    content.push_str(body);

    PageRecord {
        url: article.url(),
        title: article.title.clone(),
        content,
        image: None,
    }
}

/// Writes page records into the index, replacing any existing rows with the
/// same URL. Returns the number of pages written.
pub fn index_pages(conn: &mut Connection, pages: &[PageRecord]) -> DbResult<usize> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO pages (url, title, content, image)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(url) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                image = excluded.image,
                indexed_at = (strftime('%s', 'now') * 1000);",
        )?;
        for page in pages {
            stmt.execute(params![
                page.url,
                page.title,
                page.content,
                page.image.as_deref()
            ])?;
        }
    }
    tx.commit()?;

    info!(
        "event=index_pages module=search status=ok pages={}",
        pages.len()
    );
    Ok(pages.len())
}
