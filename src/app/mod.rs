//! Native viewer for the winding transform.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`winding_app`] | [`WindingApp`] (eframe) owning the aggregator, slider and exports |
//! | [`plots`]       | egui_plot drawing of the ring and frequency plots |
//! | [`run`]         | [`run_winding()`] / [`run_winding_with_commands()`] entry points |

mod plots;
mod run;
mod winding_app;

pub use run::{run_winding, run_winding_with_commands};
pub use winding_app::WindingApp;
