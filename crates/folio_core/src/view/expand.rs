//! Per-item expand/collapse state.
//!
//! # Responsibility
//! - Track which entry slugs are currently expanded.
//! - Support independent toggling of any number of entries.
//!
//! # Invariants
//! - Membership in the set is the sole source of truth; absence means
//!   collapsed, which is also the initial state for every id.
//! - `toggle` is its own inverse: two toggles restore the prior state.

use std::collections::BTreeSet;

/// Set of expanded entry slugs for one rendered list.
///
/// Owned by the consuming view and reset on full page reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: BTreeSet<String>,
}

impl ExpandState {
    /// Creates state with every entry collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the state of one entry and returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Returns whether one entry is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Number of currently expanded entries.
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Expanded slugs in deterministic order.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    /// Collapses every entry.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
