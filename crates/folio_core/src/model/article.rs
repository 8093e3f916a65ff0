//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical record for one written article.
//! - Mirror the authored frontmatter schema on the serde wire shape.
//!
//! # Invariants
//! - `slug` is stable and unique within the article collection.
//! - `date` is the publication date used for list ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{validate_slug, EntryValidationError};

/// One written article as authored in the content collection.
///
/// The body markdown is not carried here; it stays with the rendering
/// pipeline and only reaches this crate when building the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable identifier derived from the authored file name.
    pub slug: String,
    pub title: String,
    /// Publication date; list ordering key.
    pub date: NaiveDate,
    /// Authored summary shown on list cards.
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Authored reading-time label, e.g. `"5 min"`.
    pub reading_time: String,
    /// Featured articles surface first on the landing page.
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Checks slug and title invariants.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_slug(&self.slug)?;
        if self.title.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle {
                slug: self.slug.clone(),
            });
        }
        Ok(())
    }

    /// Returns the canonical page URL for this article.
    pub fn url(&self) -> String {
        format!("/writing/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use chrono::NaiveDate;

    fn sample() -> Article {
        Article {
            slug: "first-post".to_string(),
            title: "First Post".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            excerpt: "A short summary.".to_string(),
            tags: vec!["rust".to_string()],
            reading_time: "5 min".to_string(),
            featured: false,
        }
    }

    #[test]
    fn url_uses_writing_prefix() {
        assert_eq!(sample().url(), "/writing/first-post");
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut article = sample();
        article.title = "   ".to_string();
        assert!(article.validate().is_err());
    }
}
