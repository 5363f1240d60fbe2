//! egui_plot drawing of a [`WindingSnapshot`]: the ring and the frequency curve.

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::config::PlotFeatures;
use crate::data::snapshot::WindingSnapshot;

const CENTROID_COLOR: Color32 = Color32::RED;
const IMAG_COLOR: Color32 = Color32::YELLOW;

/// Ring plot: the wound samples as a line and the centroid as a red dot.
/// Both axes span `[-boundary, boundary]` with equal aspect.
pub fn ring_plot(ui: &mut egui::Ui, snapshot: Option<&WindingSnapshot>, features: &PlotFeatures) {
    ui.label("Ring system");
    let mut plot = Plot::new("ring_plot")
        .data_aspect(1.0)
        .show_grid(features.grid)
        .allow_scroll(false);
    if features.legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(s) = snapshot {
        let [lo, hi] = s.ring_range();
        plot = plot.include_x(lo).include_x(hi).include_y(lo).include_y(hi);
    }

    plot.show(ui, |plot_ui| {
        let Some(s) = snapshot else { return };
        let ring: PlotPoints = s.ring.clone().into();
        plot_ui.line(Line::new("ring", ring));
        plot_ui.points(
            Points::new("centroid", vec![s.centroid])
                .radius(5.0)
                .color(CENTROID_COLOR),
        );
    });
}

/// Frequency plot: real and imaginary centroid parts against period, plus the
/// marker for the current period. X spans `[0, largest period]`.
pub fn frequency_plot(ui: &mut egui::Ui, snapshot: Option<&WindingSnapshot>, features: &PlotFeatures) {
    ui.label("Fourier transform");
    let mut plot = Plot::new("frequency_plot")
        .show_grid(features.grid)
        .allow_scroll(false)
        .x_axis_label("period");
    if features.legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(s) = snapshot {
        let [x0, x1] = s.frequency_x_range();
        plot = plot
            .include_x(x0)
            .include_x(x1)
            .include_y(-s.boundary)
            .include_y(s.boundary);
    }

    plot.show(ui, |plot_ui| {
        let Some(s) = snapshot else { return };
        plot_ui.line(Line::new("real", s.frequency_real.clone()));
        plot_ui.line(Line::new("imaginary", s.frequency_imag.clone()).color(IMAG_COLOR));
        plot_ui.points(
            Points::new("current", vec![s.marker])
                .radius(5.0)
                .color(CENTROID_COLOR),
        );
    });
}
