//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading regulation
//! parameters from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{FamilyAllowanceConfig, RegulationConfig, RegulationMetadata};

/// Top-level structure of `regulation.yaml`.
#[derive(Debug, Clone, serde::Deserialize)]
struct RegulationFile {
    regulation: RegulationMetadata,
    family_allowance: FamilyAllowanceConfig,
}

/// Loads and provides access to the regulation configuration.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/cts/
/// └── regulation.yaml   # Regulation metadata and allowance tariff
/// ```
///
/// # Example
///
/// ```no_run
/// use cts_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/cts").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let rate = loader.get_family_allowance(date).unwrap();
/// println!("Family allowance: S/ {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RegulationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/cts")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cts_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/cts")?;
    /// # Ok::<(), cts_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let regulation_path = path.as_ref().join("regulation.yaml");
        let file = Self::load_yaml::<RegulationFile>(&regulation_path)?;

        let config = RegulationConfig::new(file.regulation, file.family_allowance);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying regulation configuration.
    pub fn config(&self) -> &RegulationConfig {
        &self.config
    }

    /// Returns the regulation metadata.
    pub fn regulation(&self) -> &RegulationMetadata {
        self.config.regulation()
    }

    /// Gets the family allowance amount in force on a given date.
    ///
    /// The method finds the most recent tariff entry that is effective
    /// on or before the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cts_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/cts")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let rate = loader.get_family_allowance(date)?;
    /// # Ok::<(), cts_engine::error::EngineError>(())
    /// ```
    pub fn get_family_allowance(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.config.family_allowance_rate(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration() {
        let loader = ConfigLoader::load("./config/cts").unwrap();

        assert_eq!(loader.regulation().code, "DS-001-97-TR");
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(loader.get_family_allowance(date).unwrap(), dec("102.50"));
    }

    #[test]
    fn test_shipped_configuration_matches_statutory_parameters() {
        let loader = ConfigLoader::load("./config/cts").unwrap();
        let statutory = RegulationConfig::statutory();

        for (y, m) in [(2019, 5), (2021, 11), (2022, 5), (2024, 11)] {
            let date = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
            assert_eq!(
                loader.get_family_allowance(date).unwrap(),
                statutory.family_allowance_rate(date).unwrap()
            );
        }
    }

    #[test]
    fn test_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/missing");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("regulation.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("cts_engine_bad_config");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("regulation.yaml"), "regulation: [not, a, map").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("regulation.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
