//! Command channel for driving a [`WindingAggregator`] from other threads.
//!
//! The aggregator has no internal locking. Hosts that mutate it from more than
//! one place send [`WindingCommand`]s through a [`WindingSink`]; the owner of
//! the receiver (normally the viewer's UI thread) applies them in order.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::snapshot::WindingSnapshot;
use crate::data::winding::WindingAggregator;
use crate::error::{DegenerateReason, Result};

/// Function sampled by [`WindingCommand::AddFunction`].
///
/// Note: it runs on the thread that applies the command.
pub type SampleFn = Box<dyn Fn(f64) -> f64 + Send + 'static>;

/// Messages sent over the channel to drive the aggregator.
pub enum WindingCommand {
    /// Append a single sample.
    AddPoint { x: f64, y: f64 },
    /// Append a chunk of samples.
    AddPoints { points: Vec<[f64; 2]> },
    /// Replace the dataset with samples of `f` over `[from_x, to_x]`.
    AddFunction {
        from_x: f64,
        to_x: f64,
        samples: usize,
        f: SampleFn,
    },
    /// Set period and shift; `0` means auto.
    SetPeriod { period: f64, shift: f64 },
    /// Clear samples and the frequency curve.
    Reset,
    /// Recompute with the current inputs.
    Recompute,
}

impl std::fmt::Debug for WindingCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindingCommand::AddPoint { x, y } => write!(f, "AddPoint({x}, {y})"),
            WindingCommand::AddPoints { points } => write!(f, "AddPoints({} points)", points.len()),
            WindingCommand::AddFunction {
                from_x, to_x, samples, ..
            } => write!(f, "AddFunction([{from_x}, {to_x}], {samples})"),
            WindingCommand::SetPeriod { period, shift } => {
                write!(f, "SetPeriod({period}, shift {shift})")
            }
            WindingCommand::Reset => write!(f, "Reset"),
            WindingCommand::Recompute => write!(f, "Recompute"),
        }
    }
}

impl WindingCommand {
    /// Apply this command. Only `Recompute` yields a snapshot.
    pub fn apply(self, aggregator: &mut WindingAggregator) -> Result<Option<WindingSnapshot>> {
        match self {
            WindingCommand::AddPoint { x, y } => aggregator.add_point(x, y)?,
            WindingCommand::AddPoints { points } => {
                // Whole chunk or nothing.
                if let Some([x, y]) = points
                    .iter()
                    .copied()
                    .find(|[x, y]| !x.is_finite() || !y.is_finite())
                {
                    return Err(DegenerateReason::NonFiniteSample { x, y }.into());
                }
                for [x, y] in points {
                    aggregator.add_point(x, y)?;
                }
            }
            WindingCommand::AddFunction {
                from_x,
                to_x,
                samples,
                f,
            } => aggregator.add_function(from_x, to_x, samples, f)?,
            WindingCommand::SetPeriod { period, shift } => aggregator.set_period(period, shift)?,
            WindingCommand::Reset => aggregator.reset(),
            WindingCommand::Recompute => return aggregator.recompute().map(Some),
        }
        Ok(None)
    }

    /// `true` if applying this command changes what a recompute would produce.
    pub fn invalidates(&self) -> bool {
        !matches!(self, WindingCommand::Recompute)
    }
}

/// Convenience sender for feeding commands into the viewer.
#[derive(Clone)]
pub struct WindingSink {
    tx: Sender<WindingCommand>,
}

impl WindingSink {
    pub fn add_point(&self, x: f64, y: f64) -> std::result::Result<(), SendError<WindingCommand>> {
        self.tx.send(WindingCommand::AddPoint { x, y })
    }

    /// Send a chunk of points (more efficient than point-by-point).
    pub fn add_points<I>(&self, points: I) -> std::result::Result<(), SendError<WindingCommand>>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        self.tx.send(WindingCommand::AddPoints {
            points: points.into_iter().collect(),
        })
    }

    pub fn add_function<F>(
        &self,
        from_x: f64,
        to_x: f64,
        samples: usize,
        f: F,
    ) -> std::result::Result<(), SendError<WindingCommand>>
    where
        F: Fn(f64) -> f64 + Send + 'static,
    {
        self.tx.send(WindingCommand::AddFunction {
            from_x,
            to_x,
            samples,
            f: Box::new(f),
        })
    }

    pub fn set_period(&self, period: f64, shift: f64) -> std::result::Result<(), SendError<WindingCommand>> {
        self.tx.send(WindingCommand::SetPeriod { period, shift })
    }

    pub fn reset(&self) -> std::result::Result<(), SendError<WindingCommand>> {
        self.tx.send(WindingCommand::Reset)
    }

    pub fn recompute(&self) -> std::result::Result<(), SendError<WindingCommand>> {
        self.tx.send(WindingCommand::Recompute)
    }
}

/// Create a command channel. Hand the receiver to
/// [`run_winding_with_commands`](crate::run_winding_with_commands) or drain it
/// yourself with [`drain_commands`].
pub fn channel_winding() -> (WindingSink, Receiver<WindingCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (WindingSink { tx }, rx)
}

/// Outcome of draining a command receiver.
#[derive(Debug, Default)]
pub struct DrainReport {
    /// Number of commands applied (including failed ones).
    pub applied: usize,
    /// `true` if any applied command changed the inputs.
    pub dirty: bool,
    /// Last snapshot produced by an explicit `Recompute` command.
    pub snapshot: Option<WindingSnapshot>,
    /// Errors in arrival order; a failing command does not stop the drain.
    pub errors: Vec<crate::error::WindingError>,
}

/// Apply every pending command without blocking.
pub fn drain_commands(rx: &Receiver<WindingCommand>, aggregator: &mut WindingAggregator) -> DrainReport {
    let mut report = DrainReport::default();
    while let Ok(cmd) = rx.try_recv() {
        report.applied += 1;
        let invalidates = cmd.invalidates();
        match cmd.apply(aggregator) {
            Ok(Some(snapshot)) => {
                report.snapshot = Some(snapshot);
                report.dirty = false;
            }
            Ok(None) => report.dirty |= invalidates,
            Err(e) => {
                // A failed recompute would fail again with the same inputs.
                if !invalidates {
                    report.dirty = false;
                }
                report.errors.push(e);
            }
        }
    }
    report
}
