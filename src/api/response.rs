//! Response types for the CTS Deposit Calculation Engine API.
//!
//! This module defines the success envelope and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ComputationResult;

/// Success response for the `/calculate` endpoint.
///
/// Wraps the pure [`ComputationResult`] fields in a response envelope. The
/// id, timestamp, and version belong to the response, not the calculation:
/// the underlying result stays bit-identical for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this response.
    pub calculation_id: Uuid,
    /// When the calculation was served.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// The last day of the computation period.
    pub period_end: NaiveDate,
    /// Whole computable months of service, capped at 6.
    pub computable_months: u32,
    /// Remaining computable days.
    pub computable_days: u32,
    /// One sixth of the semi-annual bonus.
    pub ordinary_bonus: Decimal,
    /// Monthly remuneration base plus the prorated bonus.
    pub total_computable_remuneration: Decimal,
    /// The CTS amount to deposit.
    pub total_benefit: Decimal,
}

impl CalculationResponse {
    /// Wraps a computation result in a fresh response envelope.
    pub fn new(result: ComputationResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            period_end: result.period_end,
            computable_months: result.computable_months,
            computable_days: result.computable_days,
            ordinary_bonus: result.ordinary_bonus,
            total_computable_remuneration: result.total_computable_remuneration,
            total_benefit: result.total_benefit,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::AllowanceRateNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "ALLOWANCE_RATE_NOT_FOUND",
                    format!("No family allowance rate in force on date {}", date),
                    "The computation period starts before the earliest configured tariff entry",
                ),
            },
            EngineError::DateOutOfRange { date, months } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DATE_OUT_OF_RANGE",
                    format!("Date arithmetic overflow adding {} months to {}", months, date),
                    "The computation period falls outside the supported calendar range",
                ),
            },
        }
    }
}
