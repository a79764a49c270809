//! HTTP API module for the CTS Deposit Calculation Engine.
//!
//! This module provides the REST API endpoint for calculating the
//! semi-annual CTS deposit.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, parse_amount_or_zero};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
