//! Integration tests for the robust-statistics primitives.
//!
//! The two outlier filters (scalar-variance and Mahalanobis) are distinct
//! primitives with different strictness; these tests pin down their observable
//! differences and the composition with the chi-square quantile.

use nalgebra::Vector3;

use feature_compressor_rs::common::SimpleRng;
use feature_compressor_rs::{
    chi_square_quantile, filter_gaussian_outliers, filter_mahalanobis_outliers,
    mahalanobis_centroid, robust_centroid, CHI_SQUARE_DOF_3D, DEFAULT_CHI2_CONFIDENCE,
};

fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

fn noisy_cluster(rng: &mut SimpleRng, center: Vector3<f64>, spread: f64, n: usize) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|_| {
            center
                + v(
                    rng.uniform(-spread, spread),
                    rng.uniform(-spread, spread),
                    rng.uniform(-spread, spread),
                )
        })
        .collect()
}

/// The default confidence composes into a usable Mahalanobis threshold.
#[test]
fn test_quantile_composes_with_mahalanobis_filter() {
    let threshold = chi_square_quantile(DEFAULT_CHI2_CONFIDENCE, CHI_SQUARE_DOF_3D);
    assert!(threshold > 7.0 && threshold < 8.5, "got {}", threshold);

    let mut rng = SimpleRng::new(3);
    let mut points = noisy_cluster(&mut rng, v(0.0, 0.0, 0.0), 0.05, 30);
    points.push(v(4.0, -4.0, 4.0));

    let survivors = filter_mahalanobis_outliers(&points, threshold);
    assert!(!survivors.contains(&v(4.0, -4.0, 4.0)));
    assert!(survivors.len() >= 25, "kept {} of 30", survivors.len());
}

/// On an anisotropic (elongated) cluster the Mahalanobis filter tolerates
/// spread along the major axis that the scalar filter also tolerates, but
/// flags off-axis deviation the scalar filter misses.
#[test]
fn test_mahalanobis_is_direction_aware() {
    // Cluster stretched along x, tight in y and z.
    let mut rng = SimpleRng::new(11);
    let mut points: Vec<Vector3<f64>> = (0..40)
        .map(|_| {
            v(
                rng.uniform(-1.0, 1.0),
                rng.uniform(-0.01, 0.01),
                rng.uniform(-0.01, 0.01),
            )
        })
        .collect();

    // Off-axis point: modest Euclidean distance, extreme in y-units.
    let off_axis = v(0.0, 0.4, 0.0);
    points.push(off_axis);

    let threshold = chi_square_quantile(0.99, CHI_SQUARE_DOF_3D);
    let mahalanobis_survivors = filter_mahalanobis_outliers(&points, threshold);
    assert!(
        !mahalanobis_survivors.contains(&off_axis),
        "off-axis point must fail the covariance-weighted test"
    );

    // The scalar-variance filter measures plain Euclidean distance, and the
    // x-spread dominates the variance, so the same point passes.
    let gaussian_survivors = filter_gaussian_outliers(&points, 2.0);
    assert!(
        gaussian_survivors.contains(&off_axis),
        "scalar filter must not be direction-aware"
    );
}

/// Both centroids agree on symmetric clean data.
#[test]
fn test_centroids_agree_on_clean_data() {
    let points = [
        v(1.0, 1.0, 1.0),
        v(-1.0, 1.0, -1.0),
        v(1.0, -1.0, -1.0),
        v(-1.0, -1.0, 1.0),
    ];

    let robust = robust_centroid(&points, 2.0);
    let mahalanobis = mahalanobis_centroid(&points, 7.81);

    assert!((robust - v(0.0, 0.0, 0.0)).norm() < 1e-12);
    assert!((mahalanobis - v(0.0, 0.0, 0.0)).norm() < 1e-12);
}

/// The scalar filter converges to the cluster centroid despite repeated
/// contamination, across several seeds.
#[test]
fn test_robust_centroid_across_seeds() {
    for seed in [1u64, 2, 3, 5, 8] {
        let mut rng = SimpleRng::new(seed);
        let truth = v(0.5, -1.5, 2.5);
        let mut points = noisy_cluster(&mut rng, truth, 0.02, 25);
        points.push(truth + v(10.0, 10.0, 10.0));
        points.push(truth - v(8.0, 12.0, 9.0));

        let centroid = robust_centroid(&points, 2.0);
        assert!(
            (centroid - truth).norm() < 0.05,
            "seed {}: centroid {:?} too far from truth",
            seed,
            centroid
        );
    }
}
