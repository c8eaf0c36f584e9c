//! Tolerances used by the point set, hull builder and rectangle fitter

use crate::{DUPLICATE_DISTANCE_SQ, EPSILON, FootprintError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Numeric tolerances for footprint estimation
///
/// The defaults suit scans measured in metres at a density of a few
/// hundred to a few thousand points per room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintConfig {
    /// Squared distance under which a new point is treated as a duplicate
    #[serde(default = "default_duplicate_distance_sq")]
    pub duplicate_distance_sq: f64,
    /// Turns with an orientation value at or below this are not counter-clockwise
    #[serde(default = "default_epsilon")]
    pub orientation_epsilon: f64,
    /// Hull edges shorter than this are skipped when fitting
    #[serde(default = "default_epsilon")]
    pub min_edge_length: f64,
}

fn default_duplicate_distance_sq() -> f64 {
    DUPLICATE_DISTANCE_SQ
}

fn default_epsilon() -> f64 {
    EPSILON
}

impl Default for FootprintConfig {
    fn default() -> Self {
        Self {
            duplicate_distance_sq: DUPLICATE_DISTANCE_SQ,
            orientation_epsilon: EPSILON,
            min_edge_length: EPSILON,
        }
    }
}

impl FootprintConfig {
    pub fn with_duplicate_distance_sq(mut self, value: f64) -> Self {
        self.duplicate_distance_sq = value;
        self
    }

    pub fn with_orientation_epsilon(mut self, value: f64) -> Self {
        self.orientation_epsilon = value;
        self
    }

    pub fn with_min_edge_length(mut self, value: f64) -> Self {
        self.min_edge_length = value;
        self
    }

    /// Check that every tolerance is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("duplicate_distance_sq", self.duplicate_distance_sq),
            ("orientation_epsilon", self.orientation_epsilon),
            ("min_edge_length", self.min_edge_length),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidConfig(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FootprintConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FootprintConfig::default();
        assert_eq!(config.duplicate_distance_sq, 1e-5);
        assert_eq!(config.orientation_epsilon, 1e-10);
        assert_eq!(config.min_edge_length, 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FootprintConfig::from_json_str(r#"{ "duplicate_distance_sq": 0.01 }"#).unwrap();
        assert_eq!(config.duplicate_distance_sq, 0.01);
        assert_eq!(config.orientation_epsilon, 1e-10);
    }

    #[test]
    fn test_rejects_negative_tolerance() {
        let config = FootprintConfig::default().with_min_edge_length(-1.0);
        assert!(matches!(
            config.validate(),
            Err(FootprintError::InvalidConfig(_))
        ));
        let err = FootprintConfig::from_json_str(r#"{ "orientation_epsilon": -0.5 }"#).unwrap_err();
        assert!(matches!(err, FootprintError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = FootprintConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FootprintError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FootprintConfig::from_file("/nonexistent/footprint.json").unwrap_err();
        assert!(matches!(err, FootprintError::Io(_)));
    }
}
