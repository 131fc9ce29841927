/*!
# Streaming feature-point compressor

Online compression of a high-rate stream of identifier-tagged 3D feature
points into a bounded, denoised point cloud.

Each incoming point carries a persistent 64-bit identifier (re-observations
of the same physical feature across frames). The compressor keeps a bounded
sliding window of raw observations per identifier, publishes a statistically
filtered centroid as that identifier's current position, and evicts the
oldest-admitted identifiers once a global capacity is exceeded.

## Features

- Capacity-bounded identifier retention with O(1) FIFO eviction
- Per-identifier bounded observation windows (strict FIFO drop)
- Robust centroid estimation with one-pass Gaussian outlier rejection
- Stricter Mahalanobis-distance outlier filter as a standalone primitive
- Chi-square quantile approximation (Acklam + Wilson-Hilferty)

## Modules

- [`compressor`] - Retention tracking, aggregation, and the facade
- [`common`] - Low-level utilities (robust statistics, quantiles, RNG)
- [`detector`] - Boundary types for the external shape-fitting collaborator

## Example

```rust
use feature_compressor_rs::{CompressorConfig, FeatureCompressor, FeaturePoint};

let config = CompressorConfig::builder()
    .max_identifier_count(10_000)
    .max_point_bin_size(50)
    .build()
    .unwrap();
let mut compressor = FeatureCompressor::new(config).unwrap();

// One frame of observations: parallel point/identifier sequences.
let points = vec![
    FeaturePoint::new(0.1, 0.2, 1.5),
    FeaturePoint::new(-0.4, 0.0, 2.0),
];
let identifiers = vec![17, 42];
compressor.append(&points, &identifiers);

assert!(compressor.updated());
assert_eq!(compressor.point_list().len(), 2);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Streaming compression: identifier retention, per-identifier aggregation,
/// and the facade that composes them.
pub mod compressor;

/// Low-level utilities (robust statistics, quantile approximations, RNG)
pub mod common;

/// Boundary types for the external surface-detection collaborator
pub mod detector;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use compressor::{
    Admission, BinStatistics, CompressorConfig, CompressorConfigBuilder, CompressorConfigSnapshot,
    FeatureCompressor, FeaturePoint, Identifier, PointBin, RetentionTracker,
    StreamingPointAggregator,
};

// Errors
pub use compressor::CompressorError;

// Robust statistics primitives
pub use common::quantile::{
    chi_square_quantile, inverse_standard_normal_cdf, CHI_SQUARE_DOF_3D, DEFAULT_CHI2_CONFIDENCE,
};
pub use common::robust::{
    average_point, filter_gaussian_outliers, filter_mahalanobis_outliers, mahalanobis_centroid,
    mean_point, robust_centroid, sample_covariance,
};

// Detector boundary
pub use detector::{SurfaceDetector, SurfaceFit, SurfacePrimitive};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
