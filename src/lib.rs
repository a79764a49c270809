//! CTS Deposit Calculation Engine
//!
//! This crate computes the semi-annual CTS deposit (Compensación por Tiempo de
//! Servicios) owed to an employee under Peruvian labor law, using the
//! 360-day-year / 30-day-month service-time convention.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
