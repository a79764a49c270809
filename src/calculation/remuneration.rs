//! Computable remuneration assembly.
//!
//! The deposit base is the monthly remuneration (gross salary plus the
//! statutory family allowance when it applies) increased by one sixth of the
//! semi-annual gratificación, which amortizes the bonus over the months of
//! the deposit cycle.

use rust_decimal::Decimal;

/// Number of months the semi-annual bonus is amortized over.
pub const BONUS_AMORTIZATION_MONTHS: u32 = 6;

/// The monthly remuneration base and its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputableRemuneration {
    /// The family allowance actually applied (zero when not claimed).
    pub allowance: Decimal,
    /// Gross monthly salary plus the applied allowance.
    pub monthly_remuneration: Decimal,
    /// One sixth of the semi-annual bonus.
    pub ordinary_bonus: Decimal,
    /// The total computable remuneration for the deposit formula.
    pub total: Decimal,
}

/// Assembles the computable remuneration for a deposit calculation.
///
/// # Arguments
///
/// * `gross_monthly_salary` - The gross monthly salary
/// * `family_allowance_applies` - Whether the statutory allowance is claimed
/// * `bonus_amount` - The gratificación paid in the July or December cycle
/// * `family_allowance_rate` - The allowance amount in force for the period
///
/// # Examples
///
/// ```
/// use cts_engine::calculation::computable_remuneration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let remuneration = computable_remuneration(
///     Decimal::from_str("3000.00").unwrap(),
///     true,
///     Decimal::from_str("600.00").unwrap(),
///     Decimal::from_str("102.50").unwrap(),
/// );
/// assert_eq!(remuneration.total, Decimal::from_str("3202.50").unwrap());
/// ```
pub fn computable_remuneration(
    gross_monthly_salary: Decimal,
    family_allowance_applies: bool,
    bonus_amount: Decimal,
    family_allowance_rate: Decimal,
) -> ComputableRemuneration {
    let allowance = if family_allowance_applies {
        family_allowance_rate
    } else {
        Decimal::ZERO
    };

    let monthly_remuneration = gross_monthly_salary + allowance;
    let ordinary_bonus = bonus_amount / Decimal::from(BONUS_AMORTIZATION_MONTHS);
    let total = monthly_remuneration + ordinary_bonus;

    ComputableRemuneration {
        allowance,
        monthly_remuneration,
        ordinary_bonus,
        total,
    }
}
