//! Content set assembly and deterministic list projections.
//!
//! # Responsibility
//! - Validate loader-supplied records as a batch and reject duplicates.
//! - Expose the sorted views the rendering layer consumes.
//!
//! # Invariants
//! - A `ContentSet` only ever holds records that passed `validate()`.
//! - Slugs are unique within each collection.
//! - Article ordering is `date DESC, slug ASC`; timeline ordering is
//!   `order ASC, slug ASC`. Both are deterministic.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use log::info;

use crate::model::article::Article;
use crate::model::project::Project;
use crate::model::timeline::TimelineEntry;
use crate::model::EntryValidationError;

/// Which timeline collection a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    Professional,
    Education,
}

/// Error raised while assembling a content set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Validation(EntryValidationError),
    /// Two records in one collection share a slug.
    DuplicateSlug { collection: &'static str, slug: String },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateSlug { collection, slug } => {
                write!(f, "duplicate slug `{slug}` in {collection} collection")
            }
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateSlug { .. } => None,
        }
    }
}

impl From<EntryValidationError> for ContentError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Immutable, validated snapshot of every authored collection.
///
/// Built once at load time; sorted views are materialized during
/// construction so accessors stay allocation-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSet {
    articles: Vec<Article>,
    professional: Vec<TimelineEntry>,
    education: Vec<TimelineEntry>,
    projects: Vec<Project>,
}

impl ContentSet {
    /// Validates every record, rejects duplicate slugs and sorts each
    /// collection into its canonical display order.
    pub fn new(
        articles: Vec<Article>,
        professional: Vec<TimelineEntry>,
        education: Vec<TimelineEntry>,
        projects: Vec<Project>,
    ) -> Result<Self, ContentError> {
        for article in &articles {
            article.validate()?;
        }
        for project in &projects {
            project.validate()?;
        }
        for entry in professional.iter().chain(education.iter()) {
            entry.validate()?;
            entry.warn_on_position_drift();
        }

        check_unique_slugs("articles", articles.iter().map(|a| a.slug.as_str()))?;
        check_unique_slugs("professional", professional.iter().map(|e| e.slug.as_str()))?;
        check_unique_slugs("education", education.iter().map(|e| e.slug.as_str()))?;
        check_unique_slugs("projects", projects.iter().map(|p| p.slug.as_str()))?;

        let mut set = Self {
            articles,
            professional,
            education,
            projects,
        };
        set.articles
            .sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        set.professional
            .sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.slug.cmp(&b.slug)));
        set.education
            .sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.slug.cmp(&b.slug)));

        info!(
            "event=content_loaded module=content status=ok articles={} professional={} education={} projects={}",
            set.articles.len(),
            set.professional.len(),
            set.education.len(),
            set.projects.len()
        );
        Ok(set)
    }

    /// Articles sorted by publication date, newest first.
    pub fn articles_by_date(&self) -> &[Article] {
        &self.articles
    }

    /// Timeline entries for one collection, sorted by authored `order`.
    pub fn timeline(&self, kind: TimelineKind) -> &[TimelineEntry] {
        match kind {
            TimelineKind::Professional => &self.professional,
            TimelineKind::Education => &self.education,
        }
    }

    /// All projects in authored order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects flagged as featured, in authored order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Projects in one category, in authored order.
    pub fn projects_in_category(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Articles carrying the given tag, newest first. Tag match is
    /// case-insensitive.
    pub fn articles_with_tag(&self, tag: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }
}

fn check_unique_slugs<'a>(
    collection: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = BTreeSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(ContentError::DuplicateSlug {
                collection,
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}
