//! Period selection for the ring mapping.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WindingError};

/// The x interval that corresponds to one full rotation.
///
/// `Auto` is resolved from the sample span on the next recompute and is then
/// replaced by `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    Auto,
    Fixed(f64),
}

impl Period {
    /// Interpret a raw slider/caller value. `0` selects `Auto`.
    pub fn from_value(period: f64) -> Result<Period> {
        if !period.is_finite() || period < 0.0 {
            return Err(WindingError::InvalidPeriod { period, shift: 0.0 });
        }
        if period == 0.0 {
            Ok(Period::Auto)
        } else {
            Ok(Period::Fixed(period))
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Period::Auto)
    }

    /// Resolved value, or `None` while still `Auto`.
    pub fn value(&self) -> Option<f64> {
        match self {
            Period::Auto => None,
            Period::Fixed(v) => Some(*v),
        }
    }

    /// Numeric form for UI controls; `Auto` maps to `0`.
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Auto => write!(f, "auto"),
            Period::Fixed(v) => write!(f, "{v:.4}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_selects_auto() {
        assert_eq!(Period::from_value(0.0).unwrap(), Period::Auto);
        assert_eq!(Period::from_value(2.5).unwrap(), Period::Fixed(2.5));
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert!(Period::from_value(-1.0).is_err());
        assert!(Period::from_value(f64::NAN).is_err());
        assert!(Period::from_value(f64::INFINITY).is_err());
    }

    #[test]
    fn auto_has_no_value() {
        assert_eq!(Period::Auto.value(), None);
        assert_eq!(Period::Auto.as_f64(), 0.0);
        assert_eq!(Period::Fixed(3.0).value(), Some(3.0));
    }
}
