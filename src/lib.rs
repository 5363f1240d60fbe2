//! Windingplot crate root: re-exports and module wiring.
//!
//! Wraps a sampled function around a circle (x as phase, y as radius) and
//! tracks the centroid of the wound points for every period explored,
//! building a discrete single-frequency response curve.
//!
//! - `data`: ring mapping, period state, the aggregator and exports
//! - `render`: the renderer seam fed with snapshots
//! - `sink`: command channel for driving the aggregator from other threads
//! - `controllers`: snapshot subscription and period requests for the viewer
//! - `config`: viewer configuration and its YAML form
//! - `app`: egui/eframe viewer and run helpers

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod render;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_winding, run_winding_with_commands, WindingApp};
pub use config::{PeriodSliderConfig, PlotFeatures, WindingConfig, WindingConfigFile};
pub use controllers::SnapshotController;
pub use data::curve::{CurveEntry, FrequencyCurve};
pub use data::period::Period;
pub use data::ring::{Centroid, RingMapper, RingPoint, Sample};
pub use data::snapshot::WindingSnapshot;
pub use data::winding::{WindingAggregator, WindingState, MAX_SAMPLE_COUNT};
pub use error::{DegenerateReason, Result, WindingError};
pub use render::{LatestSnapshot, WindingRenderer};
pub use sink::{channel_winding, drain_commands, DrainReport, SampleFn, WindingCommand, WindingSink};
