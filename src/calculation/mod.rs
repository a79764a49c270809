//! Calculation logic for the CTS Deposit Calculation Engine.
//!
//! This module contains the calculation rules for the semi-annual deposit:
//! derivation of the computation period end, service-time day counting under
//! the 360-day-year / 30-day-month convention, assembly of the computable
//! remuneration, and the deposit formula itself.

mod day_count;
mod deposit;
mod period_end;
mod remuneration;

pub use day_count::{DAYS_PER_MONTH, DAYS_PER_YEAR, count_computable_days};
pub use deposit::{COMPUTABLE_MONTH_CAP, calculate};
pub use period_end::{MONTHS_TO_PERIOD_END, derive_period_end};
pub use remuneration::{
    BONUS_AMORTIZATION_MONTHS, ComputableRemuneration, computable_remuneration,
};
