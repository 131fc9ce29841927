//! The feature compressor facade.
//!
//! Composes [`RetentionTracker`] and [`StreamingPointAggregator`]: a batch
//! of (point, identifier) pairs goes through admission, eviction cleanup,
//! and aggregation, and the current denoised point cloud is exposed as an
//! unordered snapshot for the downstream detector/renderer to pull once per
//! frame.

use std::collections::HashMap;

use serde::Serialize;

use super::aggregator::StreamingPointAggregator;
use super::config::{CompressorConfig, CompressorConfigSnapshot};
use super::errors::CompressorError;
use super::retention::{Admission, RetentionTracker};
use super::{FeaturePoint, Identifier};

/// Occupancy statistics over the per-identifier observation windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BinStatistics {
    /// Size of the largest observation window.
    pub max_bin_size: usize,
    /// Number of windows at that largest size.
    pub max_bin_count: usize,
    /// Mean window occupancy (0.0 when no identifiers are retained).
    pub average_bin_usage: f32,
    /// Number of currently retained identifiers.
    pub identifier_usage: usize,
}

/// Streaming feature-point compressor.
///
/// Ingests batches of identifier-tagged 3D points, keeps a bounded window of
/// raw observations per identifier, publishes a robust centroid per
/// identifier, and evicts the oldest-admitted identifiers once the global
/// capacity is exceeded.
///
/// Single-threaded by contract: all mutation and all reads are expected from
/// one logical execution context (e.g. once per rendered frame). Callers
/// sharing an instance across threads must supply external synchronization.
#[derive(Debug, Clone)]
pub struct FeatureCompressor {
    config: CompressorConfig,
    retention: RetentionTracker,
    aggregator: StreamingPointAggregator,
    updated: bool,
}

impl FeatureCompressor {
    /// Create a compressor from a validated configuration.
    pub fn new(config: CompressorConfig) -> Result<Self, CompressorError> {
        config.validate()?;
        Ok(Self {
            retention: RetentionTracker::new(config.max_identifier_count),
            aggregator: StreamingPointAggregator::new(
                config.max_point_bin_size,
                config.outlier_z_score,
            ),
            config,
            updated: false,
        })
    }

    /// Ingest one batch of observations.
    ///
    /// `points` and `identifiers` are parallel sequences; if their lengths
    /// differ, pairs are processed only up to the shorter length and the
    /// excess is silently dropped (the caller controls both sequences, so a
    /// mismatch is an upstream bug this core resolves deterministically).
    ///
    /// For each pair the identifier is admitted, any resulting eviction
    /// purges that identifier's window and published position, and the new
    /// observation updates the republished centroid. The dirty flag is set
    /// once per call if at least one pair was processed; an empty batch is a
    /// no-op.
    pub fn append(&mut self, points: &[FeaturePoint], identifiers: &[Identifier]) {
        let count = points.len().min(identifiers.len());
        if count == 0 {
            return;
        }

        for (point, &id) in points.iter().zip(identifiers.iter()) {
            if let Admission::AdmittedWithEviction(evicted) = self.retention.admit(id) {
                log::trace!(
                    "evicting identifier {} at capacity {}",
                    evicted,
                    self.retention.capacity()
                );
                self.aggregator.remove(evicted);
            }
            self.aggregator.observe(id, *point);
        }

        self.updated = true;
    }

    /// Current published positions, keyed by identifier.
    ///
    /// An unordered snapshot of the compressed point cloud; consumers must
    /// not rely on iteration order.
    #[inline]
    pub fn point_list(&self) -> &HashMap<Identifier, FeaturePoint> {
        self.aggregator.published()
    }

    /// Whether any batch has been processed since the flag was last reset.
    #[inline]
    pub fn updated(&self) -> bool {
        self.updated
    }

    /// Reset the dirty flag after the consumer has pulled the snapshot.
    #[inline]
    pub fn reset_updated(&mut self) {
        self.updated = false;
    }

    /// Number of currently retained identifiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.retention.len()
    }

    /// Whether no identifiers are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.retention.is_empty()
    }

    /// Purge every structure back to empty and reset the dirty flag.
    ///
    /// Allocated capacity is retained for reuse.
    pub fn clear(&mut self) {
        log::debug!("clearing compressor ({} identifiers)", self.retention.len());
        self.retention.clear();
        self.aggregator.clear();
        self.updated = false;
    }

    /// Compute occupancy statistics over the observation windows.
    pub fn statistics(&self) -> BinStatistics {
        let sizes: Vec<usize> = self.aggregator.bin_sizes().collect();
        if sizes.is_empty() {
            return BinStatistics {
                identifier_usage: self.retention.len(),
                ..BinStatistics::default()
            };
        }

        let max_bin_size = sizes.iter().copied().max().unwrap_or(0);
        let max_bin_count = sizes.iter().filter(|&&s| s == max_bin_size).count();
        let total: usize = sizes.iter().sum();

        BinStatistics {
            max_bin_size,
            max_bin_count,
            average_bin_usage: total as f32 / sizes.len() as f32,
            identifier_usage: self.retention.len(),
        }
    }

    /// The configuration this compressor was built with.
    #[inline]
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Serializable snapshot of the configuration.
    pub fn config_snapshot(&self) -> CompressorConfigSnapshot {
        CompressorConfigSnapshot::from(&self.config)
    }
}

impl Default for FeatureCompressor {
    fn default() -> Self {
        let config = CompressorConfig::default();
        Self {
            retention: RetentionTracker::new(config.max_identifier_count),
            aggregator: StreamingPointAggregator::new(
                config.max_point_bin_size,
                config.outlier_z_score,
            ),
            config,
            updated: false,
        }
    }
}
