//! Process-local UI state owned by views.
//!
//! # Responsibility
//! - Track per-item expand/collapse state for timeline and project cards.
//! - Derive the responsive is-mobile flag from viewport width updates.
//!
//! # Invariants
//! - State here lives for one page view and is never persisted.
//! - All mutation is synchronous; the host event loop serializes it.

pub mod breakpoint;
pub mod expand;
