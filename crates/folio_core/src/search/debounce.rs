//! Debounce state machine for type-as-you-search input.
//!
//! # Responsibility
//! - Hold the pending query while keystrokes keep arriving.
//! - Release it exactly once after the quiescence window elapses.
//!
//! # Invariants
//! - Every `set_query` call re-arms the timer; at most one dispatch occurs
//!   per quiescence window.
//! - Blank or whitespace-only input disarms the timer entirely.
//! - Time is injected via `Instant` arguments, never read ambiently.

use std::time::{Duration, Instant};

/// Delay after the last keystroke before a search dispatches.
pub const QUIESCENCE_WINDOW: Duration = Duration::from_millis(300);

/// Pending-query holder driven by the host event loop.
///
/// The caller forwards input changes through [`set_query`](Self::set_query)
/// and polls [`due`](Self::due) from its timer tick; the returned query is
/// the one to dispatch.
#[derive(Debug, Clone)]
pub struct DebouncedQuery {
    window: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    armed_at: Instant,
}

impl DebouncedQuery {
    /// Creates a debouncer with the standard 300ms window.
    pub fn new() -> Self {
        Self::with_window(QUIESCENCE_WINDOW)
    }

    /// Creates a debouncer with a custom window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records an input change at `now`, re-arming the timer.
    ///
    /// Whitespace-only input disarms the timer so no dispatch occurs.
    pub fn set_query(&mut self, query: &str, now: Instant) {
        if query.trim().is_empty() {
            self.pending = None;
            return;
        }
        self.pending = Some(Pending {
            query: query.to_string(),
            armed_at: now,
        });
    }

    /// Returns whether a dispatch is currently armed.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending query once the window has elapsed at `now`.
    ///
    /// Subsequent calls return `None` until `set_query` re-arms the timer.
    pub fn due(&mut self, now: Instant) -> Option<String> {
        let armed_at = self.pending.as_ref()?.armed_at;
        if now.duration_since(armed_at) < self.window {
            return None;
        }
        self.pending.take().map(|pending| pending.query)
    }
}

impl Default for DebouncedQuery {
    fn default() -> Self {
        Self::new()
    }
}
