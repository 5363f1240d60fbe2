use windingplot::data::export::{
    load_snapshot_json, save_frequency_curve_csv, save_ring_csv, save_snapshot_json,
    write_frequency_curve_csv, write_ring_csv,
};
use windingplot::{WindingAggregator, WindingError};

fn resolved() -> WindingAggregator {
    let mut agg = WindingAggregator::new();
    agg.add_point(0.0, 1.0).unwrap();
    agg.add_point(1.0, 1.0).unwrap();
    agg.add_point(2.0, 1.0).unwrap();
    agg.add_point(3.0, 1.0).unwrap();
    agg
}

#[test]
fn writes_frequency_curve_csv() {
    let mut agg = resolved();
    agg.set_period(4.0, 0.0).unwrap();
    agg.recompute().unwrap();
    agg.set_period(2.0, 0.0).unwrap();
    agg.recompute().unwrap();

    let mut buf = Vec::new();
    write_frequency_curve_csv(&mut buf, agg.frequency_curve()).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines[0], "period,real,imag,magnitude");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2.000000000,"));
    assert!(lines[2].starts_with("4.000000000,"));
}

#[test]
fn writes_ring_csv() {
    let mut agg = resolved();
    agg.set_period(4.0, 0.0).unwrap();
    let snap = agg.recompute().unwrap();

    let mut buf = Vec::new();
    write_ring_csv(&mut buf, &snap).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines[0], "index,real,imag");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "0,1,0");
}

#[test]
fn snapshot_json_file_round_trip() {
    let mut agg = resolved();
    agg.set_period(4.0, 0.5).unwrap();
    let snap = agg.recompute().unwrap();

    let path = std::env::temp_dir().join(format!("windingplot_snapshot_{}.json", std::process::id()));
    save_snapshot_json(&path, &snap).unwrap();
    let loaded = load_snapshot_json(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.period, snap.period);
    assert_eq!(loaded.ring.len(), snap.ring.len());
    assert_eq!(loaded.boundary, snap.boundary);
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_write_errors_are_reported() {
    let mut agg = resolved();
    agg.set_period(4.0, 0.0).unwrap();
    let snap = agg.recompute().unwrap();

    let csv = save_frequency_curve_csv("/dev/full", agg.frequency_curve());
    assert!(matches!(csv, Err(WindingError::Io(_))), "curve csv: {csv:?}");
    let ring = save_ring_csv("/dev/full", &snap);
    assert!(matches!(ring, Err(WindingError::Io(_))), "ring csv: {ring:?}");
    let json = save_snapshot_json("/dev/full", &snap);
    assert!(matches!(json, Err(WindingError::Io(_))), "snapshot json: {json:?}");
}
