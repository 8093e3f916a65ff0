//! Timeline domain model for professional and education history.
//!
//! # Responsibility
//! - Define one organization/institution period and its nested roles.
//! - Enforce the date-window invariant at validation time.
//!
//! # Invariants
//! - `start_date <= end_date` when `end_date` is present; `None` means the
//!   period is ongoing ("Present").
//! - Position windows should fall inside the parent entry window; that is an
//!   authoring concern checked with a warning, not an error.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::{validate_slug, EntryValidationError};

/// One role held within a [`TimelineEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub role: String,
    pub start_date: NaiveDate,
    /// `None` means the role is still held.
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl Position {
    fn validate(&self, parent_slug: &str) -> Result<(), EntryValidationError> {
        if self.role.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle {
                slug: parent_slug.to_string(),
            });
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(EntryValidationError::ReversedDateWindow {
                    slug: parent_slug.to_string(),
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }
}

/// One organization/institution period on the experience or education
/// timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Stable identifier derived from the authored file name.
    pub slug: String,
    pub organization: String,
    pub location: String,
    pub description: String,
    /// Overall start date at the organization.
    pub start_date: NaiveDate,
    /// Overall end date; `None` means ongoing.
    pub end_date: Option<NaiveDate>,
    /// Roles held during this period, newest first as authored.
    #[serde(default)]
    pub positions: Vec<Position>,
    /// External sort key; lower values render first.
    pub order: i64,
}

impl TimelineEntry {
    /// Checks slug, organization and date-window invariants, including each
    /// nested position's own window.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_slug(&self.slug)?;
        if self.organization.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle {
                slug: self.slug.clone(),
            });
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(EntryValidationError::ReversedDateWindow {
                    slug: self.slug.clone(),
                    start: self.start_date,
                    end,
                });
            }
        }
        for position in &self.positions {
            position.validate(&self.slug)?;
        }
        Ok(())
    }

    /// Logs a warning for every position window that leaks outside the
    /// parent entry window. Authoring concern only; records are kept.
    pub fn warn_on_position_drift(&self) {
        for position in &self.positions {
            let starts_early = position.start_date < self.start_date;
            let ends_late = match (position.end_date, self.end_date) {
                (Some(position_end), Some(entry_end)) => position_end > entry_end,
                // An open-ended position inside a closed entry has drifted.
                (None, Some(_)) => true,
                _ => false,
            };
            if starts_early || ends_late {
                warn!(
                    "event=position_drift module=model status=warn entry={} role={}",
                    self.slug, position.role
                );
            }
        }
    }

    /// Returns whether this period is still ongoing.
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}
