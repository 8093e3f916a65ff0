//! Timeline display assembly.
//!
//! # Responsibility
//! - Turn timeline entries into ready-to-render cards: date labels,
//!   durations, nested position rows and the expanded flag.
//! - Own the expand/collapse state for one rendered timeline.
//!
//! # Invariants
//! - Card order follows the entry slice order (the content set already
//!   sorted by the authored `order` key).
//! - Durations re-read the injected clock on every assembly, so ongoing
//!   entries stay current without mutating the records.

use crate::model::timeline::TimelineEntry;
use crate::timeline::{date_range_label, format_duration, Clock};
use crate::view::expand::ExpandState;

/// One role row inside an expanded card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    pub role: String,
    pub date_label: String,
    pub duration: String,
    pub description: String,
}

/// Ready-to-render timeline card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineCard {
    pub slug: String,
    pub organization: String,
    pub location: String,
    pub description: String,
    /// e.g. `"Jan 2020 - Present"`.
    pub date_label: String,
    /// e.g. `"2 years 3 months"`.
    pub duration: String,
    pub expanded: bool,
    /// Extended content shown only when `expanded`.
    pub positions: Vec<PositionRow>,
}

/// View-model holder for one timeline section.
pub struct TimelineView<C: Clock> {
    clock: C,
    expand: ExpandState,
}

impl<C: Clock> TimelineView<C> {
    /// Creates a view with every card collapsed.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            expand: ExpandState::new(),
        }
    }

    /// Flips one card and returns whether it is now expanded.
    pub fn toggle(&mut self, slug: &str) -> bool {
        self.expand.toggle(slug)
    }

    /// Returns whether one card is currently expanded.
    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expand.is_expanded(slug)
    }

    /// Read access for callers that render expand indicators elsewhere.
    pub fn expand_state(&self) -> &ExpandState {
        &self.expand
    }

    /// Assembles display cards for the given entries, preserving order.
    pub fn cards(&self, entries: &[TimelineEntry]) -> Vec<TimelineCard> {
        let today = self.clock.today();
        entries
            .iter()
            .map(|entry| TimelineCard {
                slug: entry.slug.clone(),
                organization: entry.organization.clone(),
                location: entry.location.clone(),
                description: entry.description.clone(),
                date_label: date_range_label(entry.start_date, entry.end_date),
                duration: format_duration(entry.start_date, entry.end_date, today),
                expanded: self.expand.is_expanded(&entry.slug),
                positions: entry
                    .positions
                    .iter()
                    .map(|position| PositionRow {
                        role: position.role.clone(),
                        date_label: date_range_label(position.start_date, position.end_date),
                        duration: format_duration(
                            position.start_date,
                            position.end_date,
                            today,
                        ),
                        description: position.description.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}
