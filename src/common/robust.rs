//! Robust centroid estimation for small 3D point samples.
//!
//! Two distinct outlier-rejection strategies are provided and deliberately
//! kept separate:
//!
//! - a **scalar-variance Gaussian filter** ([`filter_gaussian_outliers`],
//!   [`robust_centroid`]) that thresholds squared Euclidean distance against
//!   the mean squared distance - this treats the sample's spherical spread
//!   as a single scalar and is the cheap variant used in the per-frame hot
//!   path;
//! - a **Mahalanobis filter** ([`filter_mahalanobis_outliers`],
//!   [`mahalanobis_centroid`]) using the full 3x3 sample covariance, the
//!   stricter general-purpose variant for callers that need directional
//!   spread taken into account.
//!
//! All math runs in `f64`; degenerate inputs (empty slices, zero variance,
//! near-singular covariance) resolve to safe fallbacks rather than errors.

use nalgebra::{Matrix3, Vector3};

/// Relative scale of the diagonal regularization applied to the sample
/// covariance, guarding inversion against colinear/coplanar samples.
pub const COVARIANCE_REGULARIZATION: f64 = 1e-12;

/// Arithmetic mean of a point sample.
///
/// Returns the origin for an empty sample.
pub fn mean_point(points: &[Vector3<f64>]) -> Vector3<f64> {
    if points.is_empty() {
        return Vector3::zeros();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f64>, p| acc + p);
    sum / points.len() as f64
}

/// Arithmetic mean of a single-precision point sample, accumulated in `f64`.
pub fn average_point(points: &[Vector3<f32>]) -> Vector3<f32> {
    if points.is_empty() {
        return Vector3::zeros();
    }
    let sum = points
        .iter()
        .fold(Vector3::<f64>::zeros(), |acc, p| acc + p.cast::<f64>());
    let mean = sum / points.len() as f64;
    Vector3::new(mean.x as f32, mean.y as f32, mean.z as f32)
}

/// One-pass Gaussian outlier filter on squared distance from the mean.
///
/// Computes the sample mean, each point's squared Euclidean distance to it,
/// and the mean squared distance as a scalar spread estimate. Points with
/// `d² > z_score² × spread` are discarded. Not iterative: the mean and
/// spread are not recomputed after discarding.
///
/// With zero spread (all points identical) every point survives.
pub fn filter_gaussian_outliers(points: &[Vector3<f64>], z_score: f64) -> Vec<Vector3<f64>> {
    if points.is_empty() {
        return Vec::new();
    }

    let mean = mean_point(points);
    let distances_squared: Vec<f64> = points.iter().map(|p| (p - mean).norm_squared()).collect();
    let variance = distances_squared.iter().sum::<f64>() / distances_squared.len() as f64;
    let threshold_squared = z_score * z_score * variance;

    points
        .iter()
        .zip(distances_squared.iter())
        .filter(|(_, &d2)| d2 <= threshold_squared)
        .map(|(p, _)| *p)
        .collect()
}

/// Robust centroid: Gaussian-filter the sample, then average the survivors.
///
/// If the filter rejects every point (possible only for `z_score < 1`,
/// since at least one point always sits at or below the mean squared
/// distance otherwise), the unfiltered mean is returned instead.
pub fn robust_centroid(points: &[Vector3<f64>], z_score: f64) -> Vector3<f64> {
    let survivors = filter_gaussian_outliers(points, z_score);
    if survivors.is_empty() {
        return mean_point(points);
    }
    mean_point(&survivors)
}

/// Sample covariance of a 3D point set around a given mean.
///
/// Uses the (n-1)-normalized estimator and adds
/// `COVARIANCE_REGULARIZATION × max(1, trace)` to the diagonal so that
/// colinear or coplanar samples still produce an invertible matrix.
/// A sample of fewer than two points yields the bare regularization term.
pub fn sample_covariance(points: &[Vector3<f64>], mean: &Vector3<f64>) -> Matrix3<f64> {
    let mut covariance = Matrix3::zeros();

    if points.len() >= 2 {
        for p in points {
            let d = p - mean;
            covariance += d * d.transpose();
        }
        covariance *= 1.0 / (points.len() - 1) as f64;
    }

    let eps = COVARIANCE_REGULARIZATION * 1.0_f64.max(covariance.trace());
    for i in 0..3 {
        covariance[(i, i)] += eps;
    }
    covariance
}

/// Mahalanobis-distance outlier filter using the full sample covariance.
///
/// Points whose squared Mahalanobis distance from the sample mean exceeds
/// `chi2_threshold` are discarded. The threshold is a chi-square quantile
/// for 3 degrees of freedom; see
/// [`chi_square_quantile`](crate::common::quantile::chi_square_quantile).
///
/// If the regularized covariance still fails to invert, the sample is
/// returned unfiltered.
pub fn filter_mahalanobis_outliers(
    points: &[Vector3<f64>],
    chi2_threshold: f64,
) -> Vec<Vector3<f64>> {
    if points.is_empty() {
        return Vec::new();
    }

    let mean = mean_point(points);
    let covariance = sample_covariance(points, &mean);
    let inverse = match covariance.try_inverse() {
        Some(inv) => inv,
        None => return points.to_vec(),
    };

    let mut filtered = Vec::with_capacity(points.len());
    for p in points {
        let d = p - mean;
        let d2 = d.dot(&(inverse * d));
        if d2 <= chi2_threshold {
            filtered.push(*p);
        }
    }
    filtered
}

/// Mahalanobis-filtered centroid with mean fallback.
pub fn mahalanobis_centroid(points: &[Vector3<f64>], chi2_threshold: f64) -> Vector3<f64> {
    let survivors = filter_mahalanobis_outliers(points, chi2_threshold);
    if survivors.is_empty() {
        return mean_point(points);
    }
    mean_point(&survivors)
}
