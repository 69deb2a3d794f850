//! Threat report configuration file support.
//!
//! This module reads the department layout used by the company threat report
//! from a TOML configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KataError, KataResult};

/// Allowed range of a department importance tag.
pub const IMPORTANCE_RANGE: std::ops::RangeInclusive<u32> = 1..=5;

/// Threat report configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatConfig {
    #[serde(default)]
    pub sampling: SamplingSettings,
    #[serde(default)]
    pub departments: Vec<DepartmentProfile>,
}

/// Random sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingSettings {
    #[serde(default = "default_samples")]
    pub default_samples: usize,
    /// Fixed seed for reproducible reports; entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// One department of the company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentProfile {
    pub name: String,
    pub mean: i64,
    #[serde(default = "default_spread")]
    pub spread: i64,
    #[serde(default)]
    pub samples: Option<usize>,
    #[serde(default = "default_importance")]
    pub importance: u32,
}

fn default_samples() -> usize {
    100
}

fn default_spread() -> i64 {
    5
}

fn default_importance() -> u32 {
    3
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            default_samples: default_samples(),
            seed: None,
        }
    }
}

impl DepartmentProfile {
    /// Number of scores to draw, falling back to the sampling default.
    pub fn sample_count(&self, sampling: &SamplingSettings) -> usize {
        self.samples.unwrap_or(sampling.default_samples)
    }
}

impl ThreatConfig {
    /// Load threat configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ThreatConfig)` if the file was read, parsed and validated
    /// * `Err(KataError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> KataResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            KataError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        log::info!("Loaded threat config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Parse and validate threat configuration from TOML text.
    pub fn from_toml_str(content: &str) -> KataResult<Self> {
        let config: ThreatConfig = toml::from_str(content).map_err(|e| {
            KataError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load threat configuration from the default location.
    ///
    /// Searches for `threat.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> KataResult<Self> {
        let search_paths = [
            PathBuf::from("threat.toml"),
            PathBuf::from("rust_backend/threat.toml"),
            PathBuf::from("../threat.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(KataError::ConfigurationError(
            "No threat.toml found in standard locations".to_string(),
        ))
    }

    /// Check department definitions.
    pub fn validate(&self) -> KataResult<()> {
        if self.departments.is_empty() {
            return Err(KataError::ConfigurationError(
                "At least one [[departments]] entry is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for department in &self.departments {
            if department.name.trim().is_empty() {
                return Err(KataError::ConfigurationError(
                    "Department name must not be empty".to_string(),
                ));
            }
            if !seen.insert(department.name.as_str()) {
                return Err(KataError::ConfigurationError(format!(
                    "Duplicate department name: {}",
                    department.name
                )));
            }
            if !IMPORTANCE_RANGE.contains(&department.importance) {
                return Err(KataError::ConfigurationError(format!(
                    "Department '{}' has importance {}; expected 1-5",
                    department.name, department.importance
                )));
            }
        }

        Ok(())
    }

    /// Importance weights in department order.
    pub fn weights(&self) -> Vec<u32> {
        self.departments.iter().map(|d| d.importance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[sampling]
default_samples = 50
seed = 7

[[departments]]
name = "engineering"
mean = 40
spread = 5
samples = 100
importance = 3

[[departments]]
name = "finance"
mean = 70
importance = 5
"#;

        let config = ThreatConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.sampling.default_samples, 50);
        assert_eq!(config.sampling.seed, Some(7));
        assert_eq!(config.departments.len(), 2);
        assert_eq!(config.weights(), vec![3, 5]);

        let finance = &config.departments[1];
        assert_eq!(finance.spread, 5);
        assert_eq!(finance.sample_count(&config.sampling), 50);
        assert_eq!(config.departments[0].sample_count(&config.sampling), 100);
    }

    #[test]
    fn test_sampling_defaults() {
        let toml = r#"
[[departments]]
name = "ops"
mean = 45
"#;

        let config = ThreatConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.sampling.default_samples, 100);
        assert!(config.sampling.seed.is_none());
        assert_eq!(config.departments[0].importance, 3);
    }

    #[test]
    fn test_requires_departments() {
        let result = ThreatConfig::from_toml_str("[sampling]\nseed = 1\n");
        assert!(matches!(result, Err(KataError::ConfigurationError(_))));
    }

    #[test]
    fn test_rejects_importance_out_of_range() {
        let toml = r#"
[[departments]]
name = "ops"
mean = 45
importance = 6
"#;
        assert!(ThreatConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let toml = r#"
[[departments]]
name = "ops"
mean = 45

[[departments]]
name = "ops"
mean = 50
"#;
        let err = ThreatConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate department name"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ThreatConfig::from_toml_str("[[departments]\nname = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file() {
        let result = ThreatConfig::from_file("/nonexistent/threat.toml");
        assert!(matches!(result, Err(KataError::ConfigurationError(_))));
    }
}
