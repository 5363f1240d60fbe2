//! The winding aggregator: owns samples, period state and the frequency curve.

use crate::error::{DegenerateReason, Result, WindingError};
use crate::render::WindingRenderer;

use super::curve::FrequencyCurve;
use super::period::Period;
use super::ring::{Centroid, RingMapper, RingPoint, Sample};
use super::snapshot::WindingSnapshot;

/// Largest `sample_count` accepted by [`WindingAggregator::add_function`].
pub const MAX_SAMPLE_COUNT: usize = 10_000_000;

/// Lifecycle of a [`WindingAggregator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingState {
    /// No samples.
    Empty,
    /// Samples present, frequency curve still empty.
    Populated,
    /// Samples present and at least one curve entry recorded.
    Resolved,
}

/// Accumulates per-period centroids of a sampled function.
///
/// Mutations are cheap; the ring, centroid and curve entry are produced by
/// [`recompute`](Self::recompute), which is all-or-nothing: on error no field
/// changes.
#[derive(Debug, Clone, Default)]
pub struct WindingAggregator {
    samples: Vec<Sample>,
    period: Period,
    shift: f64,
    curve: FrequencyCurve,
}

impl WindingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn frequency_curve(&self) -> &FrequencyCurve {
        &self.curve
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn state(&self) -> WindingState {
        if self.samples.is_empty() {
            WindingState::Empty
        } else if self.curve.is_empty() {
            WindingState::Populated
        } else {
            WindingState::Resolved
        }
    }

    /// Append one sample.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<()> {
        let sample = Sample::new(x, y);
        if !sample.is_finite() {
            return Err(DegenerateReason::NonFiniteSample { x, y }.into());
        }
        self.samples.push(sample);
        Ok(())
    }

    /// Replace the dataset with `sample_count + 1` evaluations of `f` over
    /// `[from_x, to_x]`. `sample_count` must be in `1..=MAX_SAMPLE_COUNT`.
    ///
    /// The existing samples *and* the frequency curve are discarded. x values
    /// are produced by repeatedly adding `step = (to_x - from_x) / sample_count`
    /// to `from_x`, so the last one can drift from `to_x` by rounding.
    /// On error the previous dataset is kept.
    pub fn add_function<F>(&mut self, from_x: f64, to_x: f64, sample_count: usize, f: F) -> Result<()>
    where
        F: Fn(f64) -> f64,
    {
        if sample_count == 0 {
            return Err(DegenerateReason::ZeroSampleCount.into());
        }
        if sample_count > MAX_SAMPLE_COUNT {
            return Err(DegenerateReason::SampleCountTooLarge {
                count: sample_count,
                max: MAX_SAMPLE_COUNT,
            }
            .into());
        }
        if !from_x.is_finite() || !to_x.is_finite() || from_x == to_x {
            return Err(DegenerateReason::EmptySampleRange { from_x, to_x }.into());
        }

        let step = (to_x - from_x) / sample_count as f64;
        let mut generated = Vec::with_capacity(sample_count.saturating_add(1));
        let mut x = from_x;
        for _ in 0..=sample_count {
            let y = f(x);
            let sample = Sample::new(x, y);
            if !sample.is_finite() {
                return Err(DegenerateReason::NonFiniteSample { x, y }.into());
            }
            generated.push(sample);
            x += step;
        }

        self.samples = generated;
        self.curve.clear();
        log::debug!(
            "sampled {} points over [{from_x}, {to_x}] (step {step})",
            self.samples.len()
        );
        Ok(())
    }

    /// Set the period and phase shift without recomputing.
    ///
    /// `period == 0` switches back to automatic derivation from the sample span.
    pub fn set_period(&mut self, period: f64, shift: f64) -> Result<()> {
        if !shift.is_finite() {
            return Err(WindingError::InvalidPeriod { period, shift });
        }
        let period = Period::from_value(period)
            .map_err(|_| WindingError::InvalidPeriod { period, shift })?;
        self.period = period;
        self.shift = shift;
        Ok(())
    }

    pub fn set_period_auto(&mut self) {
        self.period = Period::Auto;
        self.shift = 0.0;
    }

    /// Drop all samples and the frequency curve. Period state is kept.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.curve.clear();
    }

    /// Resolve `(period, shift)` for the current samples without committing.
    fn resolve_period(&self) -> Result<(f64, f64)> {
        match self.period {
            Period::Fixed(p) => Ok((p, self.shift)),
            Period::Auto => {
                let (min_x, max_x) = self.samples.iter().fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), s| (lo.min(s.x), hi.max(s.x)),
                );
                let span = max_x - min_x;
                if span <= 0.0 {
                    return Err(DegenerateReason::ZeroSpan.into());
                }
                Ok((span, -min_x))
            }
        }
    }

    /// Wind every sample for the current period, record the centroid in the
    /// frequency curve and return a snapshot for rendering.
    pub fn recompute(&mut self) -> Result<WindingSnapshot> {
        if self.samples.is_empty() {
            return Err(DegenerateReason::NoSamples.into());
        }
        let (period, shift) = self.resolve_period()?;

        let mut ring = Vec::with_capacity(self.samples.len());
        let mut sum = RingPoint::ZERO;
        let mut boundary = 0.0f64;
        for s in &self.samples {
            let p = RingMapper::map_sample(*s, period, shift);
            sum.re += p.re;
            sum.im += p.im;
            boundary = boundary.max(s.y.abs());
            ring.push(p.to_array());
        }
        let n = self.samples.len() as f64;
        let centroid: Centroid = RingPoint::new(sum.re / n, sum.im / n);

        if self.period.is_auto() {
            log::info!("auto period resolved to {period} (shift {shift})");
        }
        self.period = Period::Fixed(period);
        self.shift = shift;
        self.curve.insert(period, centroid);

        log::debug!(
            "recomputed period {period}: centroid ({:.6}, {:.6}), {} curve entries",
            centroid.re,
            centroid.im,
            self.curve.len()
        );

        Ok(WindingSnapshot {
            period,
            shift,
            ring,
            centroid: centroid.to_array(),
            frequency_real: self.curve.real_curve(),
            frequency_imag: self.curve.imag_curve(),
            // Mixes re and im; kept as the established marker height.
            marker: [period, centroid.re.max(centroid.im)],
            boundary,
        })
    }

    /// Recompute and hand the snapshot to `renderer`.
    pub fn redraw<R: WindingRenderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        let snapshot = self.recompute()?;
        renderer.present(&snapshot);
        Ok(())
    }
}
