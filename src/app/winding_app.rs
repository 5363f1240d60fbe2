//! Standalone viewer that implements [`eframe::App`].
//!
//! [`WindingApp`] owns the aggregator and is its single writer: slider moves,
//! controller requests and commands arriving over the sink are all applied on
//! the UI thread, one at a time, before the frame is drawn.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use crate::config::{PeriodSliderConfig, PlotFeatures, WindingConfig};
use crate::controllers::SnapshotController;
use crate::data::export;
use crate::data::snapshot::WindingSnapshot;
use crate::data::winding::WindingAggregator;
use crate::error::WindingError;
use crate::sink::{drain_commands, WindingCommand};

use super::plots;

pub struct WindingApp {
    /// The aggregator being displayed.
    pub aggregator: WindingAggregator,
    rx: Option<Receiver<WindingCommand>>,
    controller: Option<SnapshotController>,

    pub headline: Option<String>,
    pub slider: PeriodSliderConfig,
    pub features: PlotFeatures,

    /// Value bound to the period slider.
    period_value: f64,
    snapshot: Option<WindingSnapshot>,
    last_error: Option<String>,
    dirty: bool,
}

impl WindingApp {
    pub fn new(aggregator: WindingAggregator, cfg: &WindingConfig) -> Self {
        let slider = match cfg.slider.validate() {
            Ok(()) => cfg.slider.clone(),
            Err(e) => {
                log::warn!("{e}; using the default period range");
                PeriodSliderConfig::default()
            }
        };
        let period_value = slider.clamp(aggregator.period().as_f64());
        let dirty = !aggregator.is_empty();
        Self {
            aggregator,
            rx: None,
            controller: cfg.controller.clone(),
            headline: cfg.headline.clone(),
            slider,
            features: cfg.features.clone(),
            period_value,
            snapshot: None,
            last_error: None,
            dirty,
        }
    }

    /// Attach a command receiver created by [`channel_winding`](crate::channel_winding).
    pub fn with_commands(mut self, rx: Receiver<WindingCommand>) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn snapshot(&self) -> Option<&WindingSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn report(&mut self, err: WindingError) {
        log::warn!("{err}");
        self.last_error = Some(err.to_string());
    }

    fn accept(&mut self, snapshot: WindingSnapshot) {
        self.period_value = snapshot.period;
        if let Some(ctrl) = &self.controller {
            ctrl.publish(&snapshot);
        }
        self.snapshot = Some(snapshot);
        self.last_error = None;
        self.dirty = false;
    }

    /// Recompute now and keep the result (or the error) for display.
    pub fn recompute(&mut self) {
        match self.aggregator.recompute() {
            Ok(snapshot) => self.accept(snapshot),
            Err(e) => {
                self.dirty = false;
                self.report(e);
            }
        }
    }

    fn set_period(&mut self, period: f64, shift: f64) {
        match self.aggregator.set_period(period, shift) {
            Ok(()) => self.dirty = true,
            Err(e) => self.report(e),
        }
    }

    /// Apply pending controller requests and channel commands.
    fn ingest(&mut self) {
        let request = self.controller.as_ref().and_then(|c| c.take_period_request());
        if let Some((period, shift)) = request {
            self.set_period(period, shift);
        }

        let Some(rx) = &self.rx else { return };
        let report = drain_commands(rx, &mut self.aggregator);
        if let Some(snapshot) = report.snapshot {
            self.accept(snapshot);
        }
        self.dirty |= report.dirty;
        for e in report.errors {
            self.report(e);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        if let Some(h) = &self.headline {
            ui.heading(h.as_str());
        }
        ui.horizontal(|ui| {
            let hi = self.slider.max.max(self.period_value);
            let mut slider = egui::Slider::new(&mut self.period_value, self.slider.min..=hi)
                .text("Period [x]")
                .logarithmic(self.slider.logarithmic);
            if let Some(step) = self.slider.step {
                slider = slider.step_by(step);
            }
            if ui.add(slider).changed() {
                let shift = self.aggregator.shift();
                self.set_period(self.period_value, shift);
            }

            if self.features.auto_period_button
                && ui
                    .button("Auto period")
                    .on_hover_text("Derive the period from the sample span")
                    .clicked()
            {
                self.aggregator.set_period_auto();
                self.dirty = true;
            }

            ui.separator();
            ui.label(format!(
                "{} samples, {} periods explored",
                self.aggregator.samples().len(),
                self.aggregator.frequency_curve().len()
            ));

            if self.features.export {
                ui.separator();
                self.export_buttons(ui);
            }
        });
        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
        }
    }

    fn export_buttons(&mut self, ui: &mut egui::Ui) {
        if ui.button("Export curve CSV").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(export::default_export_name("winding_curve", "csv"))
                .add_filter("CSV", &["csv"])
                .save_file()
            {
                if let Err(e) =
                    export::save_frequency_curve_csv(&path, self.aggregator.frequency_curve())
                {
                    self.report(e);
                }
            }
        }
        let Some(snapshot) = self.snapshot.clone() else { return };
        if ui.button("Export ring CSV").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(export::default_export_name("winding_ring", "csv"))
                .add_filter("CSV", &["csv"])
                .save_file()
            {
                if let Err(e) = export::save_ring_csv(&path, &snapshot) {
                    self.report(e);
                }
            }
        }
        if ui.button("Save snapshot").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(export::default_export_name("winding_snapshot", "json"))
                .add_filter("JSON", &["json"])
                .save_file()
            {
                if let Err(e) = export::save_snapshot_json(&path, &snapshot) {
                    self.report(e);
                }
            }
        }
    }
}

impl eframe::App for WindingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ingest();
        if self.dirty {
            self.recompute();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        // Slider moves are applied on the same frame so the plots never lag.
        if self.dirty {
            self.recompute();
        }

        let snapshot = self.snapshot.as_ref();
        let features = &self.features;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                plots::ring_plot(&mut cols[0], snapshot, features);
                plots::frequency_plot(&mut cols[1], snapshot, features);
            });
        });

        if self.rx.is_some() || self.controller.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_seed_is_clamped_into_range() {
        let cfg = WindingConfig::default();
        let auto = WindingApp::new(WindingAggregator::new(), &cfg);
        assert_eq!(auto.period_value, cfg.slider.min);

        let mut agg = WindingAggregator::new();
        agg.set_period(50.0, 0.0).unwrap();
        let fixed = WindingApp::new(agg, &cfg);
        assert_eq!(fixed.period_value, cfg.slider.max);
    }
}
