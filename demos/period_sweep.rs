//! Example: headless period sweep with CSV output
//!
//! What it demonstrates
//! - Using `WindingAggregator` without the viewer.
//! - Passing a closure as the renderer to `redraw`.
//! - Writing the accumulated frequency curve as CSV to stdout.
//!
//! How to run
//! ```bash
//! cargo run --example period_sweep > curve.csv
//! ```

use windingplot::data::export::write_frequency_curve_csv;
use windingplot::{WindingAggregator, WindingSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut aggregator = WindingAggregator::new();
    aggregator.add_function(-10.0, 10.0, 1000, |x| x.cos() + (2.0 * x).sin())?;

    let mut strongest = (0.0f64, 0.0f64);
    let mut track = |s: &WindingSnapshot| {
        let m = s.centroid_magnitude();
        if m > strongest.1 {
            strongest = (s.period, m);
        }
    };

    for i in 1..=100 {
        aggregator.set_period(i as f64 * 0.1, 0.0)?;
        aggregator.redraw(&mut track)?;
    }
    log::info!(
        "strongest response at period {:.2} (|centroid| {:.4})",
        strongest.0,
        strongest.1
    );

    write_frequency_curve_csv(std::io::stdout().lock(), aggregator.frequency_curve())?;
    Ok(())
}
