//! Winding viewer seeded with `cos(x) + sin(2x)` over [-10, 10] at period 5.

use windingplot::{run_winding, WindingAggregator, WindingConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut aggregator = WindingAggregator::new();
    aggregator.add_function(-10.0, 10.0, 1000, |x| x.cos() + (2.0 * x).sin())?;
    aggregator.set_period(5.0, 0.0)?;

    let cfg = WindingConfig {
        headline: Some("cos(x) + sin(2x)".to_string()),
        ..WindingConfig::default()
    };
    run_winding(aggregator, cfg)?;
    Ok(())
}
