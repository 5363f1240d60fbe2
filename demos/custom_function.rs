//! Example: drive the viewer from a background thread
//!
//! What it demonstrates
//! - Feeding a dataset through `WindingSink` instead of touching the aggregator.
//! - Sweeping the period programmatically while the window is open.
//! - Observing every rendered snapshot via `SnapshotController::subscribe`.
//!
//! How to run
//! ```bash
//! RUST_LOG=info cargo run --example custom_function
//! ```

use std::time::Duration;

use windingplot::{
    channel_winding, run_winding_with_commands, SnapshotController, WindingAggregator,
    WindingConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let (sink, rx) = channel_winding();
    let controller = SnapshotController::new();
    let updates = controller.subscribe();

    // Producer: a 3-cycle square-ish wave, then a slow sweep over the period.
    std::thread::spawn(move || {
        let _ = sink.add_function(0.0, 3.0, 600, |x| {
            let s = (std::f64::consts::TAU * x).sin();
            s + (3.0 * std::f64::consts::TAU * x).sin() / 3.0
        });
        let _ = sink.set_period(0.0, 0.0);
        let _ = sink.recompute();
        let mut period = 0.2;
        while period <= 2.0 {
            std::thread::sleep(Duration::from_millis(40));
            // Ignore error if the UI closed (receiver dropped)
            if sink.set_period(period, 0.0).is_err() {
                break;
            }
            period += 0.01;
        }
    });

    std::thread::spawn(move || {
        for snapshot in updates {
            log::info!(
                "period {:.3}: |centroid| = {:.4}",
                snapshot.period,
                snapshot.centroid_magnitude()
            );
        }
    });

    let cfg = WindingConfig {
        title: "Winding (custom function)".to_string(),
        controller: Some(controller),
        ..WindingConfig::default()
    };
    run_winding_with_commands(WindingAggregator::new(), rx, cfg)?;
    Ok(())
}
