//! Error types for the winding core and its file helpers.

use thiserror::Error;

/// Why an input set cannot produce a winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegenerateReason {
    /// `recompute` was called without any samples.
    NoSamples,
    /// Auto period requested but every sample shares the same x.
    ZeroSpan,
    /// A sample (or a sampled function value) is NaN or infinite.
    NonFiniteSample { x: f64, y: f64 },
    /// `add_function` range has equal or non-finite bounds.
    EmptySampleRange { from_x: f64, to_x: f64 },
    /// `add_function` asked for zero samples.
    ZeroSampleCount,
    /// `add_function` asked for more samples than the aggregator accepts.
    SampleCountTooLarge { count: usize, max: usize },
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateReason::NoSamples => write!(f, "no samples to wind"),
            DegenerateReason::ZeroSpan => {
                write!(f, "all samples share one x coordinate, auto period would be 0")
            }
            DegenerateReason::NonFiniteSample { x, y } => {
                write!(f, "sample ({x}, {y}) is not finite")
            }
            DegenerateReason::EmptySampleRange { from_x, to_x } => {
                write!(f, "cannot sample the range [{from_x}, {to_x}]")
            }
            DegenerateReason::ZeroSampleCount => write!(f, "sample count must be at least 1"),
            DegenerateReason::SampleCountTooLarge { count, max } => {
                write!(f, "sample count {count} exceeds the limit of {max}")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum WindingError {
    #[error("degenerate input: {0}")]
    DegenerateInput(DegenerateReason),

    #[error("invalid period {period} (shift {shift}): period must be >= 0 and both must be finite")]
    InvalidPeriod { period: f64, shift: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl WindingError {
    /// `true` for errors caused by caller input rather than I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WindingError::DegenerateInput(_) | WindingError::InvalidPeriod { .. }
        )
    }
}

impl From<DegenerateReason> for WindingError {
    fn from(reason: DegenerateReason) -> Self {
        WindingError::DegenerateInput(reason)
    }
}

pub type Result<T> = std::result::Result<T, WindingError>;
