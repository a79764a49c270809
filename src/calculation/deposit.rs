//! The end-to-end deposit calculation.
//!
//! Composes the period end derivation, the 360-day service count, and the
//! computable remuneration into the final CTS deposit: one twelfth of the
//! computable remuneration per computable month, plus a thirtieth of that
//! for each leftover day.

use rust_decimal::Decimal;

use crate::config::RegulationConfig;
use crate::error::EngineResult;
use crate::models::{ComputationInput, ComputationResult};

use super::day_count::{DAYS_PER_MONTH, count_computable_days};
use super::period_end::derive_period_end;
use super::remuneration::computable_remuneration;

/// Maximum number of computable months in a semi-annual deposit.
pub const COMPUTABLE_MONTH_CAP: u32 = 6;

/// Months of service that accrue one full monthly remuneration of benefit.
const MONTHS_PER_YEAR: u32 = 12;

/// Calculates the CTS deposit for one employee and one computation period.
///
/// A pure function: identical inputs produce identical results, and a failed
/// calculation returns no partial data.
///
/// # Arguments
///
/// * `input` - The employment and compensation inputs
/// * `config` - The regulation parameters (family allowance tariff)
///
/// # Returns
///
/// The populated [`ComputationResult`], or an error when the period end
/// cannot be derived ([`EngineError::DateOutOfRange`]) or no allowance rate
/// is in force for the period start ([`EngineError::AllowanceRateNotFound`]).
///
/// [`EngineError::DateOutOfRange`]: crate::error::EngineError::DateOutOfRange
/// [`EngineError::AllowanceRateNotFound`]: crate::error::EngineError::AllowanceRateNotFound
///
/// # Examples
///
/// ```
/// use cts_engine::calculation::calculate;
/// use cts_engine::config::RegulationConfig;
/// use cts_engine::models::ComputationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = ComputationInput {
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     period_start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     gross_monthly_salary: Decimal::from_str("3000.00").unwrap(),
///     family_allowance_applies: true,
///     bonus_amount: Decimal::from_str("600.00").unwrap(),
/// };
///
/// let result = calculate(&input, &RegulationConfig::statutory()).unwrap();
/// assert_eq!(result.computable_months, 6);
/// assert_eq!(result.total_benefit, Decimal::from_str("1601.25").unwrap());
/// ```
pub fn calculate(
    input: &ComputationInput,
    config: &RegulationConfig,
) -> EngineResult<ComputationResult> {
    let period_end = derive_period_end(input.period_start)?;
    let effective_start = input.hire_date.max(input.period_start);
    let total_days = count_computable_days(effective_start, period_end);
    let (computable_months, computable_days) = split_service_time(total_days);

    let family_allowance_rate = config.family_allowance_rate(input.period_start)?;
    let remuneration = computable_remuneration(
        input.gross_monthly_salary,
        input.family_allowance_applies,
        input.bonus_amount,
        family_allowance_rate,
    );

    let monthly_value = remuneration.total / Decimal::from(MONTHS_PER_YEAR);
    let daily_value = monthly_value / Decimal::from(DAYS_PER_MONTH);
    let total_benefit = Decimal::from(computable_months) * monthly_value
        + Decimal::from(computable_days) * daily_value;

    Ok(ComputationResult {
        period_end,
        computable_months,
        computable_days,
        ordinary_bonus: remuneration.ordinary_bonus,
        total_computable_remuneration: remuneration.total,
        total_benefit,
    })
}

/// Splits a 360-convention day count into capped months and leftover days.
///
/// Months are capped at [`COMPUTABLE_MONTH_CAP`]; the day remainder is taken
/// from the uncapped count, so a count past the cap still reports its own
/// modulo-30 remainder.
fn split_service_time(total_days: u32) -> (u32, u32) {
    let months = (total_days / DAYS_PER_MONTH).min(COMPUTABLE_MONTH_CAP);
    let days = total_days % DAYS_PER_MONTH;
    (months, days)
}
