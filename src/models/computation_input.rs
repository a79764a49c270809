//! Computation input model.
//!
//! This module defines the [`ComputationInput`] struct carrying the
//! employment and compensation data for a single deposit calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs for a single CTS deposit calculation.
///
/// Amounts are expected to be non-negative; callers coerce absent or
/// unparseable amount text to zero before constructing this value, so the
/// engine never rejects a well-typed input.
///
/// # Example
///
/// ```
/// use cts_engine::models::ComputationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = ComputationInput {
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     gross_monthly_salary: Decimal::from_str("3000.00").unwrap(),
///     family_allowance_applies: true,
///     bonus_amount: Decimal::from_str("600.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationInput {
    /// The date employment began.
    pub hire_date: NaiveDate,
    /// The first day of the semi-annual accrual window under evaluation.
    pub period_start: NaiveDate,
    /// The gross monthly salary.
    pub gross_monthly_salary: Decimal,
    /// Whether the statutory family allowance is added to monthly remuneration.
    pub family_allowance_applies: bool,
    /// The gratificación paid in the semi-annual bonus cycle (July or December).
    pub bonus_amount: Decimal,
}
