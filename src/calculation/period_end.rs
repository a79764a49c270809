//! Computation period end derivation.
//!
//! This module derives the final day of the semi-annual computation period
//! from its start date. Deposits cover May-October and November-April
//! windows, so the period always closes on the last day of the 5th month
//! after the month the period starts in.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Months added to the period start before snapping to the end of month.
///
/// The window spans the start month through the 5th following month,
/// inclusive: six calendar months in total.
pub const MONTHS_TO_PERIOD_END: u32 = 5;

/// Derives the last day of the computation period.
///
/// Adds [`MONTHS_TO_PERIOD_END`] calendar months to `period_start` (the
/// day-of-month is clamped when the target month is shorter) and then
/// advances to the last calendar day of the resulting month. The day-of-month
/// of `period_start` never changes the outcome's month.
///
/// # Arguments
///
/// * `period_start` - The first day of the semi-annual accrual window
///
/// # Returns
///
/// The period end date, or [`EngineError::DateOutOfRange`] when the addition
/// leaves the representable calendar range.
///
/// # Examples
///
/// ```
/// use cts_engine::calculation::derive_period_end;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let end = derive_period_end(start).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
/// ```
pub fn derive_period_end(period_start: NaiveDate) -> EngineResult<NaiveDate> {
    let shifted = period_start
        .checked_add_months(Months::new(MONTHS_TO_PERIOD_END))
        .ok_or(EngineError::DateOutOfRange {
            date: period_start,
            months: MONTHS_TO_PERIOD_END,
        })?;

    let last_day = days_in_month(shifted.year(), shifted.month());
    Ok(shifted
        .with_day(last_day)
        .expect("last day valid for its month"))
}

/// Number of calendar days in the given month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
