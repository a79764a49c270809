//! Configuration loading and management for the CTS Deposit Calculation Engine.
//!
//! This module provides functionality to load regulation parameters from YAML
//! files: the legal metadata of the benefit and the effective-dated family
//! allowance tariff.
//!
//! # Example
//!
//! ```no_run
//! use cts_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cts").unwrap();
//! println!("Loaded regulation: {}", config.regulation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllowanceRate, FamilyAllowanceConfig, RegulationConfig, RegulationMetadata};
