//! Per-identifier streaming aggregation.
//!
//! For each retained identifier this component maintains a bounded sliding
//! window of raw observations and, on every update, recomputes a
//! statistically filtered centroid as the identifier's published position.
//!
//! The centroid is recomputed from the entire current window rather than
//! maintained incrementally: the window is capped small, so the O(window)
//! cost is bounded, the outlier threshold stays stable, and no drift
//! accumulates from incremental-update rounding.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::common::robust::robust_centroid;

use super::bin::PointBin;
use super::{FeaturePoint, Identifier};

/// Maintains per-identifier observation windows and published positions.
#[derive(Debug, Clone)]
pub struct StreamingPointAggregator {
    max_bin_size: usize,
    outlier_z_score: f64,
    bins: HashMap<Identifier, PointBin>,
    published: HashMap<Identifier, FeaturePoint>,
}

impl StreamingPointAggregator {
    /// Create an aggregator with the given window capacity and outlier
    /// z-score.
    pub fn new(max_bin_size: usize, outlier_z_score: f64) -> Self {
        Self {
            max_bin_size,
            outlier_z_score,
            bins: HashMap::new(),
            published: HashMap::new(),
        }
    }

    /// Record an observation for an identifier and republish its position.
    ///
    /// The first-ever observation of an identifier is published verbatim
    /// (no filtering is possible with one sample). Every later observation
    /// recomputes the robust centroid over the whole current window.
    ///
    /// Returns the newly published position.
    pub fn observe(&mut self, id: Identifier, point: FeaturePoint) -> FeaturePoint {
        let max_bin_size = self.max_bin_size;
        let bin = self
            .bins
            .entry(id)
            .or_insert_with(|| PointBin::new(max_bin_size));
        bin.push(point);

        let position = if bin.len() == 1 {
            point
        } else {
            let samples: Vec<Vector3<f64>> = bin.iter().map(|p| p.cast::<f64>()).collect();
            let centroid = robust_centroid(&samples, self.outlier_z_score);
            FeaturePoint::new(centroid.x as f32, centroid.y as f32, centroid.z as f32)
        };

        self.published.insert(id, position);
        position
    }

    /// Purge all state for an identifier (window and published position).
    pub fn remove(&mut self, id: Identifier) {
        self.bins.remove(&id);
        self.published.remove(&id);
    }

    /// Current published positions, keyed by identifier.
    ///
    /// An unordered snapshot; an entry exists iff the identifier has at
    /// least one retained observation.
    #[inline]
    pub fn published(&self) -> &HashMap<Identifier, FeaturePoint> {
        &self.published
    }

    /// Number of retained observations for an identifier, if tracked.
    pub fn bin_len(&self, id: Identifier) -> Option<usize> {
        self.bins.get(&id).map(|bin| bin.len())
    }

    /// Sizes of all observation windows, in no particular order.
    pub fn bin_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.bins.values().map(|bin| bin.len())
    }

    /// Remove all per-identifier state, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.bins.clear();
        self.published.clear();
    }
}
