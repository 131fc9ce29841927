//! Boundary types for the external shape-detection collaborator.
//!
//! The surface detector itself is a black box: given the compressed point
//! cloud and a seed index, it either fits a geometric primitive or finds
//! nothing. Only the seam is modeled here, so the compressor can be wired
//! to any detector implementation without depending on one.

use nalgebra::Vector3;

use crate::compressor::FeaturePoint;

/// A fitted geometric primitive.
///
/// One variant per shape the detector can produce, each carrying its own
/// geometric payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfacePrimitive {
    /// Bounded planar patch, described by its corner points.
    Plane {
        /// Lower-left corner
        lower_left: Vector3<f32>,
        /// Lower-right corner
        lower_right: Vector3<f32>,
        /// Upper-left corner
        upper_left: Vector3<f32>,
        /// Upper-right corner
        upper_right: Vector3<f32>,
    },
    /// Sphere.
    Sphere {
        /// Center point
        center: Vector3<f32>,
        /// Radius
        radius: f32,
    },
    /// Finite cylinder along the segment from `bottom` to `top`.
    Cylinder {
        /// Center of the top cap
        top: Vector3<f32>,
        /// Center of the bottom cap
        bottom: Vector3<f32>,
        /// Radius
        radius: f32,
    },
    /// Truncated cone along the segment from `bottom` to `top`.
    Cone {
        /// Center of the top cap
        top: Vector3<f32>,
        /// Center of the bottom cap
        bottom: Vector3<f32>,
        /// Radius of the top cap
        top_radius: f32,
        /// Radius of the bottom cap
        bottom_radius: f32,
    },
    /// Torus.
    Torus {
        /// Center point
        center: Vector3<f32>,
        /// Axis of revolution (unit length)
        axis: Vector3<f32>,
        /// Distance from the center to the tube center
        mean_radius: f32,
        /// Tube radius
        tube_radius: f32,
    },
}

impl SurfacePrimitive {
    /// Short name of the primitive kind, for logging and UI labels.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SurfacePrimitive::Plane { .. } => "plane",
            SurfacePrimitive::Sphere { .. } => "sphere",
            SurfacePrimitive::Cylinder { .. } => "cylinder",
            SurfacePrimitive::Cone { .. } => "cone",
            SurfacePrimitive::Torus { .. } => "torus",
        }
    }
}

/// Result of a successful detection: the fitted primitive plus the common
/// fit-quality fields every variant shares.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFit {
    /// The fitted primitive.
    pub primitive: SurfacePrimitive,
    /// Indices (into the point cloud handed to the detector) of the points
    /// the fit considers inliers.
    pub inliers: Vec<usize>,
    /// Root-mean-square residual of the inliers against the fitted surface.
    pub rms_error: f32,
}

/// External shape detector.
///
/// Given a point cloud and the index of a seed point, returns a fitted
/// primitive or `None` when nothing was found. Implementations wrap
/// whatever fitting backend the application links against.
pub trait SurfaceDetector {
    /// Attempt to fit a primitive seeded at `points[seed_index]`.
    fn detect(&self, points: &[FeaturePoint], seed_index: usize) -> Option<SurfaceFit>;
}
