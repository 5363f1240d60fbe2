//! Ring mapping: wrap a sample onto a circle using x as phase and y as radius.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WindingError};

/// A single input sample. Insertion order is sampling order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point on (or inside) the ring, as a complex number `re + i*im`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RingPoint {
    pub re: f64,
    pub im: f64,
}

/// Mean of all ring points for one period.
pub type Centroid = RingPoint;

impl RingPoint {
    pub const ZERO: RingPoint = RingPoint { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// `[re, im]`, the layout plot lines consume.
    pub fn to_array(self) -> [f64; 2] {
        [self.re, self.im]
    }
}

impl From<RingPoint> for [f64; 2] {
    fn from(p: RingPoint) -> Self {
        p.to_array()
    }
}

/// Stateless transform from a sample to its ring coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingMapper;

impl RingMapper {
    /// Map `(x, y)` onto the ring for the given period and phase shift.
    ///
    /// The angle is `((x + shift) / period) * 2π` and the result is
    /// `y * (cos θ, sin θ)`, so the point lies on a circle of radius `|y|`
    /// (negative `y` reflects through the center).
    ///
    /// `period` must be non-zero; use [`RingMapper::try_map`] when it may not be.
    pub fn map(x: f64, y: f64, period: f64, shift: f64) -> RingPoint {
        let theta = ((x + shift) / period) * std::f64::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        RingPoint {
            re: y * cos,
            im: y * sin,
        }
    }

    /// Checked variant of [`RingMapper::map`] that rejects a zero or non-finite period.
    pub fn try_map(x: f64, y: f64, period: f64, shift: f64) -> Result<RingPoint> {
        if period == 0.0 || !period.is_finite() || !shift.is_finite() {
            return Err(WindingError::InvalidPeriod { period, shift });
        }
        Ok(Self::map(x, y, period, shift))
    }

    pub fn map_sample(sample: Sample, period: f64, shift: f64) -> RingPoint {
        Self::map(sample.x, sample.y, period, shift)
    }
}
