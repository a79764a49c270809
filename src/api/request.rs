//! Request types for the CTS Deposit Calculation Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and the amount-text coercion policy applied to it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::ComputationInput;

/// Request body for the `/calculate` endpoint.
///
/// Amount fields arrive as free text, the way a form field delivers them;
/// absent, empty, or non-numeric text is coerced to zero by
/// [`parse_amount_or_zero`] before the engine is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The date employment began.
    pub hire_date: NaiveDate,
    /// The first day of the computation period.
    pub period_start: NaiveDate,
    /// The gross monthly salary as entered.
    #[serde(default)]
    pub gross_monthly_salary: Option<String>,
    /// Whether the statutory family allowance applies.
    #[serde(default)]
    pub family_allowance: bool,
    /// The semi-annual gratificación as entered.
    #[serde(default)]
    pub bonus_amount: Option<String>,
}

/// Coerces amount text to a decimal, defaulting to zero.
///
/// Empty, whitespace-only, or non-numeric text becomes `Decimal::ZERO`
/// rather than an error; an amount a user never typed contributes nothing to
/// the deposit.
///
/// # Examples
///
/// ```
/// use cts_engine::api::parse_amount_or_zero;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount_or_zero("3000.00"), Decimal::from_str("3000.00").unwrap());
/// assert_eq!(parse_amount_or_zero(""), Decimal::ZERO);
/// assert_eq!(parse_amount_or_zero("abc"), Decimal::ZERO);
/// ```
pub fn parse_amount_or_zero(text: &str) -> Decimal {
    Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO)
}

impl From<CalculationRequest> for ComputationInput {
    fn from(req: CalculationRequest) -> Self {
        ComputationInput {
            hire_date: req.hire_date,
            period_start: req.period_start,
            gross_monthly_salary: parse_amount_or_zero(
                req.gross_monthly_salary.as_deref().unwrap_or(""),
            ),
            family_allowance_applies: req.family_allowance,
            bonus_amount: parse_amount_or_zero(req.bonus_amount.as_deref().unwrap_or("")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "hire_date": "2020-01-01",
            "period_start": "2024-05-01",
            "gross_monthly_salary": "3000.00",
            "family_allowance": true,
            "bonus_amount": "600.00"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.hire_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(request.gross_monthly_salary.as_deref(), Some("3000.00"));
        assert!(request.family_allowance);
    }

    #[test]
    fn test_deserialize_with_omitted_amounts() {
        let json = r#"{
            "hire_date": "2020-01-01",
            "period_start": "2024-05-01"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.gross_monthly_salary.is_none());
        assert!(request.bonus_amount.is_none());
        assert!(!request.family_allowance);
    }

    #[test]
    fn test_parse_amount_or_zero_valid_text() {
        assert_eq!(parse_amount_or_zero("3000.00"), dec("3000.00"));
        assert_eq!(parse_amount_or_zero(" 102.50 "), dec("102.50"));
        assert_eq!(parse_amount_or_zero("0"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_or_zero_invalid_text() {
        assert_eq!(parse_amount_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("   "), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("12,50"), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("S/ 3000"), Decimal::ZERO);
    }

    #[test]
    fn test_conversion_coerces_unparseable_amounts_to_zero() {
        let request = CalculationRequest {
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            period_start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            gross_monthly_salary: Some("not a number".to_string()),
            family_allowance: true,
            bonus_amount: None,
        };

        let input: ComputationInput = request.into();
        assert_eq!(input.gross_monthly_salary, Decimal::ZERO);
        assert_eq!(input.bonus_amount, Decimal::ZERO);
        assert!(input.family_allowance_applies);
    }

    #[test]
    fn test_conversion_keeps_valid_amounts() {
        let request = CalculationRequest {
            hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            period_start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            gross_monthly_salary: Some("3000.00".to_string()),
            family_allowance: false,
            bonus_amount: Some("600.00".to_string()),
        };

        let input: ComputationInput = request.into();
        assert_eq!(input.gross_monthly_salary, dec("3000.00"));
        assert_eq!(input.bonus_amount, dec("600.00"));
    }
}
