//! Error types for the CTS Deposit Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a deposit calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the CTS Deposit Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use cts_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/regulation.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/regulation.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No family allowance rate is in force for the given date.
    #[error("No family allowance rate in force on date {date}")]
    AllowanceRateNotFound {
        /// The date for which a rate was requested.
        date: NaiveDate,
    },

    /// Date arithmetic left the representable calendar range.
    #[error("Date arithmetic overflow adding {months} months to {date}")]
    DateOutOfRange {
        /// The date the arithmetic started from.
        date: NaiveDate,
        /// The number of months that was being added.
        months: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/regulation.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/regulation.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_allowance_rate_not_found_displays_date() {
        let error = EngineError::AllowanceRateNotFound {
            date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No family allowance rate in force on date 1990-01-01"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_date_and_months() {
        let error = EngineError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            months: 5,
        };
        assert_eq!(
            error.to_string(),
            "Date arithmetic overflow adding 5 months to 2024-05-01"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
