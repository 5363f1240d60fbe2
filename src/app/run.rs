//! Top-level entry points for running the viewer as a native window.

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::WindingConfig;
use crate::data::winding::WindingAggregator;
use crate::sink::WindingCommand;

use super::WindingApp;

/// Open the viewer for `aggregator`. Blocks until the window is closed.
pub fn run_winding(aggregator: WindingAggregator, cfg: WindingConfig) -> eframe::Result<()> {
    let app = WindingApp::new(aggregator, &cfg);
    launch(app, cfg)
}

/// Like [`run_winding`], additionally applying commands sent through the
/// [`WindingSink`](crate::WindingSink) paired with `rx`.
pub fn run_winding_with_commands(
    aggregator: WindingAggregator,
    rx: Receiver<WindingCommand>,
    cfg: WindingConfig,
) -> eframe::Result<()> {
    let app = WindingApp::new(aggregator, &cfg).with_commands(rx);
    launch(app, cfg)
}

fn launch(app: WindingApp, mut cfg: WindingConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Two square-ish plots side by side.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 760.0));
    }

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
