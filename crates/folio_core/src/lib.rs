//! Core content engine for the portfolio/blog site.
//! This crate is the single source of truth for content invariants and
//! display projections; rendering layers stay markup-only.

pub mod content;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod timeline;
pub mod view;

pub use content::{ContentError, ContentSet, TimelineKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::Article;
pub use model::project::Project;
pub use model::timeline::{Position, TimelineEntry};
pub use model::EntryValidationError;
pub use search::debounce::{DebouncedQuery, QUIESCENCE_WINDOW};
pub use search::fts::FtsSearchProvider;
pub use search::provider::{SearchDoc, SearchError, SearchProvider, SearchResult};
pub use search::SearchBox;
pub use service::timeline_service::{PositionRow, TimelineCard, TimelineView};
pub use timeline::{Clock, SystemClock};
pub use view::breakpoint::{BreakpointWatcher, SubscriptionId, DEFAULT_MOBILE_BREAKPOINT};
pub use view::expand::ExpandState;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
