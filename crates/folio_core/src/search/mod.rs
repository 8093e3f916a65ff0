//! Search-box orchestration over a pluggable full-text index.
//!
//! # Responsibility
//! - Compose the debounce timer with a search provider.
//! - Absorb provider absence and provider failures into an empty result
//!   state; search never surfaces an error to the user.
//!
//! # Invariants
//! - Blank input clears results without touching the provider.
//! - Exactly one provider call occurs per quiescence window.

use log::warn;

pub mod debounce;
pub mod fts;
pub mod provider;

use debounce::DebouncedQuery;
use provider::{SearchDoc, SearchProvider};
use std::time::Instant;

/// Search-box state for the writing page.
///
/// The host event loop forwards keystrokes to [`on_input`](Self::on_input)
/// and calls [`poll`](Self::poll) on timer ticks; results and the result
/// count are read back for rendering.
pub struct SearchBox<P: SearchProvider> {
    provider: Option<P>,
    debouncer: DebouncedQuery,
    results: Vec<SearchDoc>,
    result_count: Option<usize>,
}

impl<P: SearchProvider> SearchBox<P> {
    /// Creates a search box. `provider = None` models an index that failed
    /// to load; every dispatch then degrades to zero results.
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            debouncer: DebouncedQuery::new(),
            results: Vec::new(),
            result_count: None,
        }
    }

    /// Replaces the debouncer, used to shorten the window under test.
    pub fn with_debouncer(mut self, debouncer: DebouncedQuery) -> Self {
        self.debouncer = debouncer;
        self
    }

    /// Records an input change at `now`.
    ///
    /// Blank input immediately clears results and the count back to the
    /// neutral state and disarms the pending dispatch.
    pub fn on_input(&mut self, query: &str, now: Instant) {
        if query.trim().is_empty() {
            self.results.clear();
            self.result_count = None;
        }
        self.debouncer.set_query(query, now);
    }

    /// Drives the debounce timer. Returns `true` when a dispatch ran.
    ///
    /// Provider errors are logged and absorbed as zero results.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(query) = self.debouncer.due(now) else {
            return false;
        };

        match &self.provider {
            Some(provider) => match provider.search(&query) {
                Ok(docs) => {
                    self.result_count = Some(docs.len());
                    self.results = docs;
                }
                Err(err) => {
                    warn!(
                        "event=search_failed module=search status=degraded query_len={} error={}",
                        query.len(),
                        err
                    );
                    self.results.clear();
                    self.result_count = Some(0);
                }
            },
            None => {
                self.results.clear();
                self.result_count = Some(0);
            }
        }

        true
    }

    /// Documents from the most recent dispatch.
    pub fn results(&self) -> &[SearchDoc] {
        &self.results
    }

    /// `None` until the first dispatch completes or after input is cleared.
    pub fn result_count(&self) -> Option<usize> {
        self.result_count
    }

    /// Human-readable count line, e.g. `"3 articles found"`.
    pub fn result_summary(&self) -> Option<String> {
        self.result_count.map(|count| match count {
            0 => "No articles found".to_string(),
            1 => "1 article found".to_string(),
            n => format!("{n} articles found"),
        })
    }
}
