//! Project domain model for the portfolio grid.

use serde::{Deserialize, Serialize};

use super::{validate_slug, EntryValidationError};

/// One portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier derived from the authored file name.
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Cover image path; the rendering layer owns fallback handling.
    pub image: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
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
}
