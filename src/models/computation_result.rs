//! Computation result model.
//!
//! This module contains the [`ComputationResult`] type that captures all
//! outputs of a deposit calculation as plain, independently readable fields,
//! so any renderer can format them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a CTS deposit calculation.
///
/// Every field is derived purely from a [`ComputationInput`]: calculating
/// twice with identical input yields an identical result. The struct carries
/// no ids or timestamps; response envelopes add those where needed.
///
/// [`ComputationInput`]: super::ComputationInput
///
/// # Example
///
/// ```
/// use cts_engine::models::ComputationResult;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = ComputationResult {
///     period_end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     computable_months: 6,
///     computable_days: 0,
///     ordinary_bonus: Decimal::from_str("100.00").unwrap(),
///     total_computable_remuneration: Decimal::from_str("3202.50").unwrap(),
///     total_benefit: Decimal::from_str("1601.25").unwrap(),
/// };
/// assert!(result.has_deposit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// The last day of the computation period. Derived, never user-supplied.
    pub period_end: NaiveDate,
    /// Whole computable months of service, capped at 6.
    pub computable_months: u32,
    /// Remaining computable days, always in 0..=29.
    pub computable_days: u32,
    /// One sixth of the semi-annual bonus.
    pub ordinary_bonus: Decimal,
    /// Monthly remuneration base plus the prorated bonus.
    pub total_computable_remuneration: Decimal,
    /// The CTS amount to deposit.
    pub total_benefit: Decimal,
}

impl ComputationResult {
    /// Returns true if there is a positive deposit to show.
    ///
    /// Renderers display a result only when this holds; a zero-valued
    /// calculation suppresses the results section entirely.
    ///
    /// # Example
    ///
    /// ```
    /// use cts_engine::models::ComputationResult;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let result = ComputationResult {
    ///     period_end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    ///     computable_months: 0,
    ///     computable_days: 0,
    ///     ordinary_bonus: Decimal::ZERO,
    ///     total_computable_remuneration: Decimal::ZERO,
    ///     total_benefit: Decimal::ZERO,
    /// };
    /// assert!(!result.has_deposit());
    /// ```
    pub fn has_deposit(&self) -> bool {
        self.total_benefit > Decimal::ZERO
    }
}
