//! Service-time day counting under the 360-day-year convention.
//!
//! CTS service time is measured in 30-day months and 360-day years: the
//! calendar difference between two dates is decomposed into whole years,
//! whole months, and leftover days, and each unit is weighted at its
//! conventional length rather than its actual one.

use chrono::{Datelike, Months, NaiveDate};

use super::period_end::days_in_month;

/// Conventional length of a month in days.
pub const DAYS_PER_MONTH: u32 = 30;

/// Conventional length of a year in days.
pub const DAYS_PER_YEAR: u32 = 360;

/// Counts the days of computable service between two dates.
///
/// The calendar difference is decomposed into `(years, months, days)` the way
/// a calendar computes component spans: whole months are taken first (with
/// the day-of-month clamped in shorter target months), and the remainder is
/// the literal day gap. The result is
/// `years * 360 + months * 30 + days`.
///
/// If `effective_start` is after `period_end` the inputs are inconsistent and
/// the count is clamped to zero; it is never negative.
///
/// # Arguments
///
/// * `effective_start` - First day of accrued service within the period
/// * `period_end` - Last day of the computation period
///
/// # Examples
///
/// ```
/// use cts_engine::calculation::count_computable_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2022, 3, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// // 2 years, 3 months, 10 days
/// assert_eq!(count_computable_days(start, end), 2 * 360 + 3 * 30 + 10);
/// ```
pub fn count_computable_days(effective_start: NaiveDate, period_end: NaiveDate) -> u32 {
    if effective_start > period_end {
        return 0;
    }

    let (years, months, days) = calendar_span(effective_start, period_end);
    years * DAYS_PER_YEAR + months * DAYS_PER_MONTH + days
}

/// Decomposes the span between two ordered dates into calendar components.
///
/// Whole months are counted with end-of-month clamping: the 31st of January
/// reaches "one month later" on the 28th or 29th of February. The day
/// component is the literal number of days left after the last whole month.
fn calendar_span(start: NaiveDate, end: NaiveDate) -> (u32, u32, u32) {
    let mut whole_months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;

    let anchor_day = start.day().min(days_in_month(end.year(), end.month()));
    if anchor_day > end.day() {
        whole_months -= 1;
    }
    let whole_months = whole_months as u32;

    let anchor = start
        .checked_add_months(Months::new(whole_months))
        .expect("anchor lies between start and end");
    let days = end.signed_duration_since(anchor).num_days() as u32;

    (whole_months / 12, whole_months % 12, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_multi_year_span() {
        // 2 years, 3 months, 10 days
        assert_eq!(
            count_computable_days(date(2022, 3, 10), date(2024, 6, 20)),
            820
        );
    }

    #[test]
    fn test_equal_dates_count_zero() {
        assert_eq!(count_computable_days(date(2024, 6, 30), date(2024, 6, 30)), 0);
    }

    #[test]
    fn test_start_after_end_clamps_to_zero() {
        assert_eq!(count_computable_days(date(2024, 7, 1), date(2024, 6, 30)), 0);
        assert_eq!(count_computable_days(date(2030, 1, 1), date(2024, 6, 30)), 0);
    }

    #[test]
    fn test_statutory_semester_day_counts() {
        // May-October deposit window, worked in full.
        assert_eq!(
            count_computable_days(date(2024, 5, 1), date(2024, 10, 31)),
            180
        );
        // November-April window.
        assert_eq!(
            count_computable_days(date(2023, 11, 1), date(2024, 4, 30)),
            179
        );
    }

    #[test]
    fn test_partial_semester() {
        // Hired mid-February against a period ending June 30: 4 months, 15 days.
        assert_eq!(
            count_computable_days(date(2024, 2, 15), date(2024, 6, 30)),
            135
        );
    }

    #[test]
    fn test_convention_differs_from_actual_elapsed_days() {
        // Jan 1 to Jun 30 is 181 actual days but 5 months 29 days by
        // calendar components, so the convention counts 179.
        assert_eq!(count_computable_days(date(2024, 1, 1), date(2024, 6, 30)), 179);
    }

    #[test]
    fn test_days_within_single_month() {
        assert_eq!(count_computable_days(date(2024, 6, 1), date(2024, 6, 30)), 29);
        assert_eq!(count_computable_days(date(2024, 6, 15), date(2024, 6, 20)), 5);
    }

    #[test]
    fn test_end_of_month_clamping() {
        // Jan 31 reaches "one month later" on leap-February's last day.
        assert_eq!(count_computable_days(date(2024, 1, 31), date(2024, 2, 29)), 30);
        // One clamped month plus the day into March.
        assert_eq!(count_computable_days(date(2024, 1, 31), date(2024, 3, 1)), 31);
        // Mar 31 to Apr 30 is exactly one clamped month.
        assert_eq!(count_computable_days(date(2024, 3, 31), date(2024, 4, 30)), 30);
    }

    #[test]
    fn test_exact_month_boundaries() {
        assert_eq!(count_computable_days(date(2024, 1, 15), date(2024, 2, 15)), 30);
        assert_eq!(count_computable_days(date(2024, 1, 15), date(2024, 4, 15)), 90);
        assert_eq!(count_computable_days(date(2023, 1, 15), date(2024, 1, 15)), 360);
    }

    #[test]
    fn test_year_boundary_crossing() {
        // Dec 20 to Jan 5: 0 months, 16 days.
        assert_eq!(count_computable_days(date(2023, 12, 20), date(2024, 1, 5)), 16);
    }

    #[test]
    fn test_span_exceeding_six_months_is_not_capped_here() {
        // The month cap is applied by the deposit calculation, not the count.
        assert_eq!(
            count_computable_days(date(2023, 1, 1), date(2024, 10, 31)),
            660
        );
    }
}
