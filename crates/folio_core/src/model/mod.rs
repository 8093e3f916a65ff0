//! Domain model for authored content collections.
//!
//! # Responsibility
//! - Define the canonical record shapes for articles, timeline entries and
//!   projects as handed over by the content loader.
//! - Provide per-record validation used at content-set assembly time.
//!
//! # Invariants
//! - Every record is identified by a stable authored `slug`.
//! - Records are immutable after the content set is built.
//! - Timeline date windows must satisfy `start_date <= end_date` when an end
//!   date is present.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

pub mod article;
pub mod project;
pub mod timeline;

/// Validation error shared by all content record types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Record slug is empty or whitespace-only.
    EmptySlug,
    /// Record title (or organization/role) is empty.
    EmptyTitle { slug: String },
    /// Date window is reversed: `end` is earlier than `start`.
    ReversedDateWindow {
        slug: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug => write!(f, "record slug must not be empty"),
            Self::EmptyTitle { slug } => write!(f, "record `{slug}` has an empty title"),
            Self::ReversedDateWindow { slug, start, end } => write!(
                f,
                "record `{slug}` has end date ({end}) earlier than start date ({start})"
            ),
        }
    }
}

impl Error for EntryValidationError {}

/// Checks the shared slug invariant for any record type.
pub(crate) fn validate_slug(slug: &str) -> Result<(), EntryValidationError> {
    if slug.trim().is_empty() {
        return Err(EntryValidationError::EmptySlug);
    }
    Ok(())
}
