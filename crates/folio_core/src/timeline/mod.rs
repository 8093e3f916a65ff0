//! Timeline display math.
//!
//! # Responsibility
//! - Turn date windows into the human-readable labels the timeline renders.
//! - Keep "now" injectable so duration output is testable.
//!
//! # Invariants
//! - All functions in this module are pure given their inputs; the only
//!   time-varying path is `SystemClock` feeding an open-ended window.

use chrono::NaiveDate;

pub mod duration;

pub use duration::{date_range_label, format_duration, format_month_year, span_in_months};

/// Source of "today" for open-ended duration computation.
///
/// Durations for ongoing periods re-read the clock on every evaluation;
/// with `SystemClock` that is accepted time-varying output, with a fixed
/// test clock it is fully deterministic.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by the site at render time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
