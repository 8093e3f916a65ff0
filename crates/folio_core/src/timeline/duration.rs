//! Month-granular duration and date-label formatting.
//!
//! # Responsibility
//! - Compute whole-month spans between dates, ignoring the day of month.
//! - Render duration and "Mon YYYY" labels with exact pluralization.
//!
//! # Invariants
//! - Day-of-month is ignored: a start of Jan 15 and an end of Feb 1 count
//!   as 1 month.
//! - A reversed window (end before start) clamps to zero months and logs a
//!   warning; display output never goes negative.

use chrono::{Datelike, NaiveDate};
use log::warn;

/// Formats a date as a short month/year label, e.g. `"Jan 2022"`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Formats the window label shown next to a timeline title, e.g.
/// `"Jan 2022 - Present"` or `"Jan 2022 - Mar 2023"`.
pub fn date_range_label(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) => format!("{} - {}", format_month_year(start), format_month_year(end)),
        None => format!("{} - Present", format_month_year(start)),
    }
}

/// Whole-month span between two dates; day-of-month is ignored.
pub fn span_in_months(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Renders a month-granular duration, e.g. `"2 years 3 months"`.
///
/// `end = None` means the period is ongoing and `today` is used as the end.
/// Pluralization rules:
/// - less than a year: `"{m} month(s)"`, including `"0 months"`;
/// - exact years: `"{y} year(s)"`;
/// - otherwise both clauses, each pluralized independently.
pub fn format_duration(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> String {
    let effective_end = end.unwrap_or(today);
    let mut months = span_in_months(start, effective_end);
    if months < 0 {
        warn!(
            "event=reversed_window module=timeline status=warn start={start} end={effective_end}"
        );
        months = 0;
    }

    let years = months / 12;
    let remainder = months % 12;

    if years == 0 {
        return format!("{months} month{}", plural_suffix(months));
    }
    if remainder == 0 {
        return format!("{years} year{}", plural_suffix(years));
    }
    format!(
        "{years} year{} {remainder} month{}",
        plural_suffix(years),
        plural_suffix(remainder)
    )
}

fn plural_suffix(count: i32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::{date_range_label, format_duration, format_month_year, span_in_months};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_year_label_is_short_form() {
        assert_eq!(format_month_year(date(2022, 1, 15)), "Jan 2022");
        assert_eq!(format_month_year(date(1999, 12, 31)), "Dec 1999");
    }

    #[test]
    fn range_label_uses_present_for_open_end() {
        assert_eq!(
            date_range_label(date(2022, 1, 1), None),
            "Jan 2022 - Present"
        );
        assert_eq!(
            date_range_label(date(2022, 1, 1), Some(date(2023, 3, 1))),
            "Jan 2022 - Mar 2023"
        );
    }

    #[test]
    fn span_ignores_day_of_month() {
        assert_eq!(span_in_months(date(2022, 1, 15), date(2022, 2, 1)), 1);
        assert_eq!(span_in_months(date(2022, 1, 1), date(2022, 1, 31)), 0);
    }

    #[test]
    fn singular_and_plural_clauses() {
        let today = date(2024, 1, 1);
        assert_eq!(
            format_duration(date(2023, 12, 1), Some(date(2024, 1, 1)), today),
            "1 month"
        );
        assert_eq!(
            format_duration(date(2023, 1, 1), Some(date(2024, 1, 1)), today),
            "1 year"
        );
        assert_eq!(
            format_duration(date(2022, 12, 1), Some(date(2024, 1, 1)), today),
            "1 year 1 month"
        );
        assert_eq!(
            format_duration(date(2020, 3, 1), Some(date(2024, 8, 1)), today),
            "4 years 5 months"
        );
    }

    #[test]
    fn reversed_window_clamps_to_zero() {
        let today = date(2024, 1, 1);
        assert_eq!(
            format_duration(date(2024, 6, 1), Some(date(2024, 1, 1)), today),
            "0 months"
        );
    }
}
