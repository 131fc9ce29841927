/*!
Streaming feature-point compression.

Two components compose into a single facade:

- [`RetentionTracker`] - bounds the number of distinct identifiers,
  evicting the oldest-admitted one when capacity is exceeded
- [`StreamingPointAggregator`] - keeps a bounded observation window per
  identifier and republishes a robust centroid on every observation

[`FeatureCompressor`] wires them together: a batch of (point, identifier)
pairs goes through admission, eviction cleanup, and aggregation, and the
current denoised point cloud is exposed as an unordered snapshot.
*/

pub mod aggregator;
pub mod bin;
pub mod compressor;
pub mod config;
pub mod errors;
pub mod retention;

pub use aggregator::StreamingPointAggregator;
pub use bin::PointBin;
pub use compressor::{BinStatistics, FeatureCompressor};
pub use config::{CompressorConfig, CompressorConfigBuilder, CompressorConfigSnapshot};
pub use errors::CompressorError;
pub use retention::{Admission, RetentionTracker};

use nalgebra::Vector3;

/// Persistent feature identifier, supplied by the upstream tracking source.
///
/// Stable across frames for the same physical feature; opaque to this crate.
pub type Identifier = u64;

/// A single observed 3D position.
///
/// Observations are stored in single precision; statistics are computed in
/// `f64` and truncated back on publish.
pub type FeaturePoint = Vector3<f32>;

// ============================================================================
// Default configuration constants
// ============================================================================

/// Default maximum number of distinct identifiers retained at once.
///
/// Sized for a working set in the hundreds of thousands: a multi-minute
/// scan of a feature-rich environment stays under this without eviction.
pub const DEFAULT_MAX_IDENTIFIER_COUNT: usize = 100_000;

/// Default capacity of each per-identifier observation window.
///
/// Bounds the cost of the full-window centroid recomputation; the window is
/// deliberately small so recomputing from scratch beats maintaining
/// incremental moving statistics (stable threshold, no accumulated drift).
pub const DEFAULT_MAX_POINT_BIN_SIZE: usize = 100;

/// Default z-score for the one-pass Gaussian outlier filter.
///
/// Observations farther than two standard deviations (in squared-distance
/// terms) from the window mean are excluded from the published centroid.
pub const DEFAULT_OUTLIER_Z_SCORE: f64 = 2.0;
