//! Render-ready output of one recompute pass.

use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one state of the winding.
///
/// Points use the `[x, y]` layout that plot lines consume directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingSnapshot {
    /// Resolved period used for this pass.
    pub period: f64,
    /// Phase shift used for this pass.
    pub shift: f64,
    /// Ring-mapped samples in sampling order.
    pub ring: Vec<[f64; 2]>,
    /// Mean of `ring`.
    pub centroid: [f64; 2],
    /// `(period, centroid.re)` for every explored period, ascending.
    pub frequency_real: Vec<[f64; 2]>,
    /// `(period, centroid.im)` for every explored period, ascending.
    pub frequency_imag: Vec<[f64; 2]>,
    /// Highlighted point on the frequency plot: `(period, max(re, im))`.
    pub marker: [f64; 2],
    /// Largest `|y|` over the samples; both plots span `[-boundary, boundary]` vertically.
    pub boundary: f64,
}

impl WindingSnapshot {
    /// `(min, max)` for both axes of the ring plot.
    pub fn ring_range(&self) -> [f64; 2] {
        [-self.boundary, self.boundary]
    }

    /// X range of the frequency plot: from zero to the largest explored period.
    pub fn frequency_x_range(&self) -> [f64; 2] {
        let last = self
            .frequency_real
            .last()
            .map(|p| p[0])
            .unwrap_or(self.period);
        [0.0, last]
    }

    pub fn centroid_magnitude(&self) -> f64 {
        self.centroid[0].hypot(self.centroid[1])
    }
}
