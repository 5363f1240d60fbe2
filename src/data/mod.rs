//! Winding core: ring mapping, period state, aggregation and export.

pub mod curve;
pub mod export;
pub mod period;
pub mod ring;
pub mod snapshot;
pub mod winding;
