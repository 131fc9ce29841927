//! Configuration for the feature compressor.
//!
//! All parameters are fixed at construction; nothing is runtime-mutable.
//! A serializable snapshot type is provided for debugging and comparison
//! across runs.

use serde::Serialize;

use super::errors::CompressorError;

/// Compressor configuration.
///
/// Controls the global identifier capacity, the per-identifier observation
/// window, and the outlier threshold of the hot-path centroid filter.
#[derive(Debug, Clone)]
pub struct CompressorConfig {
    /// Maximum number of distinct identifiers retained at once.
    /// When exceeded, the oldest-admitted identifier is evicted.
    pub max_identifier_count: usize,

    /// Capacity of each per-identifier observation window.
    /// When full, the oldest observation is dropped first.
    pub max_point_bin_size: usize,

    /// Z-score threshold for the one-pass Gaussian outlier filter.
    /// Observations with squared distance above `z² × variance` are
    /// excluded from the published centroid.
    pub outlier_z_score: f64,
}

impl CompressorConfig {
    /// Create a new configuration.
    pub fn new(max_identifier_count: usize, max_point_bin_size: usize, outlier_z_score: f64) -> Self {
        Self {
            max_identifier_count,
            max_point_bin_size,
            outlier_z_score,
        }
    }

    /// Create with builder pattern.
    pub fn builder() -> CompressorConfigBuilder {
        CompressorConfigBuilder::default()
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<(), CompressorError> {
        if self.max_identifier_count == 0 {
            return Err(CompressorError::Configuration {
                description: "max_identifier_count must be at least 1".to_string(),
            });
        }
        if self.max_point_bin_size == 0 {
            return Err(CompressorError::Configuration {
                description: "max_point_bin_size must be at least 1".to_string(),
            });
        }
        if !self.outlier_z_score.is_finite() || self.outlier_z_score <= 0.0 {
            return Err(CompressorError::Configuration {
                description: format!(
                    "outlier_z_score must be a positive finite value, got {}",
                    self.outlier_z_score
                ),
            });
        }
        Ok(())
    }
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            max_identifier_count: super::DEFAULT_MAX_IDENTIFIER_COUNT,
            max_point_bin_size: super::DEFAULT_MAX_POINT_BIN_SIZE,
            outlier_z_score: super::DEFAULT_OUTLIER_Z_SCORE,
        }
    }
}

/// Builder for [`CompressorConfig`].
#[derive(Debug, Default)]
pub struct CompressorConfigBuilder {
    max_identifier_count: Option<usize>,
    max_point_bin_size: Option<usize>,
    outlier_z_score: Option<f64>,
}

impl CompressorConfigBuilder {
    /// Set the maximum retained identifier count.
    pub fn max_identifier_count(mut self, count: usize) -> Self {
        self.max_identifier_count = Some(count);
        self
    }

    /// Set the per-identifier observation window capacity.
    pub fn max_point_bin_size(mut self, size: usize) -> Self {
        self.max_point_bin_size = Some(size);
        self
    }

    /// Set the outlier filter z-score.
    pub fn outlier_z_score(mut self, z_score: f64) -> Self {
        self.outlier_z_score = Some(z_score);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<CompressorConfig, CompressorError> {
        let config = CompressorConfig {
            max_identifier_count: self
                .max_identifier_count
                .unwrap_or(super::DEFAULT_MAX_IDENTIFIER_COUNT),
            max_point_bin_size: self
                .max_point_bin_size
                .unwrap_or(super::DEFAULT_MAX_POINT_BIN_SIZE),
            outlier_z_score: self.outlier_z_score.unwrap_or(super::DEFAULT_OUTLIER_Z_SCORE),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Snapshot of a compressor configuration for debugging and comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CompressorConfigSnapshot {
    /// Maximum retained identifier count
    pub max_identifier_count: usize,
    /// Per-identifier observation window capacity
    pub max_point_bin_size: usize,
    /// Outlier filter z-score
    pub outlier_z_score: f64,
}

impl From<&CompressorConfig> for CompressorConfigSnapshot {
    fn from(c: &CompressorConfig) -> Self {
        Self {
            max_identifier_count: c.max_identifier_count,
            max_point_bin_size: c.max_point_bin_size,
            outlier_z_score: c.outlier_z_score,
        }
    }
}

impl CompressorConfigSnapshot {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CompressorConfig::default();
        assert_eq!(config.max_identifier_count, super::super::DEFAULT_MAX_IDENTIFIER_COUNT);
        assert_eq!(config.max_point_bin_size, super::super::DEFAULT_MAX_POINT_BIN_SIZE);
        assert_eq!(config.outlier_z_score, super::super::DEFAULT_OUTLIER_Z_SCORE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CompressorConfig::builder()
            .max_identifier_count(500)
            .max_point_bin_size(20)
            .outlier_z_score(1.5)
            .build()
            .unwrap();

        assert_eq!(config.max_identifier_count, 500);
        assert_eq!(config.max_point_bin_size, 20);
        assert!((config.outlier_z_score - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_config_builder_partial_defaults() {
        let config = CompressorConfig::builder()
            .max_point_bin_size(10)
            .build()
            .unwrap();

        assert_eq!(config.max_identifier_count, super::super::DEFAULT_MAX_IDENTIFIER_COUNT);
        assert_eq!(config.max_point_bin_size, 10);
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        assert!(CompressorConfig::builder()
            .max_identifier_count(0)
            .build()
            .is_err());
        assert!(CompressorConfig::builder()
            .max_point_bin_size(0)
            .build()
            .is_err());
    }

    #[test]
    fn test_config_rejects_bad_z_score() {
        assert!(CompressorConfig::new(100, 10, 0.0).validate().is_err());
        assert!(CompressorConfig::new(100, 10, -1.0).validate().is_err());
        assert!(CompressorConfig::new(100, 10, f64::NAN).validate().is_err());
        assert!(CompressorConfig::new(100, 10, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_config_snapshot_json() {
        let config = CompressorConfig::new(1000, 50, 2.0);
        let snapshot = CompressorConfigSnapshot::from(&config);
        let json = snapshot.to_json();
        assert!(json.contains("\"max_identifier_count\":1000"));
        assert!(json.contains("\"max_point_bin_size\":50"));
    }
}
