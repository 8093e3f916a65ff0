//! Article list projections and markdown-derived fallbacks.
//!
//! # Responsibility
//! - Produce ready-to-render article rows with display dates.
//! - Derive excerpt and reading-time fallbacks from markdown bodies when
//!   the authored fields are blank.
//!
//! # Invariants
//! - Derived excerpts carry no markdown syntax and are capped at 160 chars.
//! - Reading time never reports below 1 minute.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::article::Article;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const EXCERPT_MAX_CHARS: usize = 160;
const READING_WORDS_PER_MINUTE: usize = 200;
const FALLBACK_READING_TIME: &str = "5 min";

/// Ready-to-render article list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub slug: String,
    pub url: String,
    pub title: String,
    /// Long-form display date, e.g. `"January 15, 2024"`.
    pub date_label: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// e.g. `"5 min"`; falls back to a default when not authored.
    pub reading_time: String,
    pub featured: bool,
}

/// Assembles display rows for articles, preserving input order.
pub fn article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|article| ArticleRow {
            slug: article.slug.clone(),
            url: article.url(),
            title: article.title.clone(),
            date_label: article.date.format("%B %-d, %Y").to_string(),
            excerpt: article.excerpt.clone(),
            tags: article.tags.clone(),
            reading_time: if article.reading_time.trim().is_empty() {
                FALLBACK_READING_TIME.to_string()
            } else {
                article.reading_time.clone()
            },
            featured: article.featured,
        })
        .collect()
}

/// Derives a plain-text excerpt from a markdown body.
///
/// Rules: images removed, links reduced to their text, markdown symbols
/// stripped, whitespace collapsed, first 160 chars retained. Returns `None`
/// when nothing readable remains.
pub fn derive_excerpt(markdown: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(markdown, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(EXCERPT_MAX_CHARS).collect())
}

/// Estimates a reading-time label from a markdown body at 200 wpm,
/// e.g. `"5 min"`. Floors at 1 minute.
pub fn estimate_reading_time(markdown: &str) -> String {
    let words = markdown.split_whitespace().count();
    let minutes = words.div_ceil(READING_WORDS_PER_MINUTE).max(1);
    format!("{minutes} min")
}

#[cfg(test)]
mod tests {
    use super::{derive_excerpt, estimate_reading_time};

    #[test]
    fn excerpt_strips_markdown_and_caps_length() {
        let source = "# Title\n\nSome ![alt](img.png) text with a [link](https://example.com) and **bold**.";
        let excerpt = derive_excerpt(source).expect("excerpt should exist");
        assert!(!excerpt.contains('#'));
        assert!(!excerpt.contains('!'));
        assert!(excerpt.contains("link"));
        assert!(excerpt.chars().count() <= 160);
    }

    #[test]
    fn excerpt_of_pure_markup_is_none() {
        assert_eq!(derive_excerpt("![](a.png)\n---\n"), None);
    }

    #[test]
    fn reading_time_floors_at_one_minute() {
        assert_eq!(estimate_reading_time("just a few words"), "1 min");
    }

    #[test]
    fn reading_time_rounds_up() {
        let body = "word ".repeat(401);
        assert_eq!(estimate_reading_time(&body), "3 min");
    }
}
