//! Configuration types for the deposit regulation parameters.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the regulation.
///
/// Identifies the legal source the calculation parameters come from.
#[derive(Debug, Clone, Deserialize)]
pub struct RegulationMetadata {
    /// The decree or statute code (e.g., "DS-001-97-TR").
    pub code: String,
    /// The human-readable name of the benefit regulation.
    pub name: String,
    /// The version or consolidation date of the regulation text.
    pub version: String,
    /// URL to the official regulation documentation.
    pub source_url: String,
}

/// A family allowance amount effective from a given date.
///
/// The allowance tracks the statutory minimum wage, so its amount changes
/// over time; each entry records the amount in force from its date onward.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceRate {
    /// The date this amount takes effect.
    pub effective_date: NaiveDate,
    /// The monthly allowance amount.
    pub amount: Decimal,
}

/// Family allowance section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyAllowanceConfig {
    /// Reference to the statute establishing the allowance.
    pub clause: String,
    /// Allowance amounts by effective date.
    pub rates: Vec<AllowanceRate>,
}

/// The complete regulation configuration loaded from YAML.
#[derive(Debug, Clone)]
pub struct RegulationConfig {
    /// Regulation metadata.
    metadata: RegulationMetadata,
    /// Family allowance amounts by effective date (sorted oldest first).
    family_allowance: FamilyAllowanceConfig,
}

impl RegulationConfig {
    /// Creates a new RegulationConfig from its component parts.
    pub fn new(metadata: RegulationMetadata, family_allowance: FamilyAllowanceConfig) -> Self {
        let mut family_allowance = family_allowance;
        family_allowance
            .rates
            .sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            family_allowance,
        }
    }

    /// Returns the built-in statutory parameter set.
    ///
    /// Carries the published family allowance amounts: S/ 93.00 from April
    /// 2018 and S/ 102.50 from May 2022, when the minimum wage moved to
    /// S/ 1,025.
    ///
    /// # Example
    ///
    /// ```
    /// use cts_engine::config::RegulationConfig;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let config = RegulationConfig::statutory();
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// assert_eq!(
    ///     config.family_allowance_rate(date).unwrap(),
    ///     Decimal::new(10250, 2)
    /// );
    /// ```
    pub fn statutory() -> Self {
        let metadata = RegulationMetadata {
            code: "DS-001-97-TR".to_string(),
            name: "Compensación por Tiempo de Servicios".to_string(),
            version: "2022-05-01".to_string(),
            source_url: "https://www.gob.pe/institucion/mtpe/normas-legales".to_string(),
        };
        let family_allowance = FamilyAllowanceConfig {
            clause: "Ley 25129".to_string(),
            rates: vec![
                AllowanceRate {
                    effective_date: NaiveDate::from_ymd_opt(2018, 4, 1)
                        .expect("valid statutory date"),
                    amount: Decimal::new(9300, 2),
                },
                AllowanceRate {
                    effective_date: NaiveDate::from_ymd_opt(2022, 5, 1)
                        .expect("valid statutory date"),
                    amount: Decimal::new(10250, 2),
                },
            ],
        };
        Self::new(metadata, family_allowance)
    }

    /// Returns the regulation metadata.
    pub fn regulation(&self) -> &RegulationMetadata {
        &self.metadata
    }

    /// Returns the family allowance configuration.
    pub fn family_allowance(&self) -> &FamilyAllowanceConfig {
        &self.family_allowance
    }

    /// Resolves the family allowance amount in force on a given date.
    ///
    /// Picks the most recent entry whose effective date is on or before the
    /// given date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AllowanceRateNotFound`] when every entry takes
    /// effect after the date.
    pub fn family_allowance_rate(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.family_allowance
            .rates
            .iter()
            .rfind(|r| r.effective_date <= date)
            .map(|r| r.amount)
            .ok_or(EngineError::AllowanceRateNotFound { date })
    }
}
