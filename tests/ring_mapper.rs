use windingplot::{RingMapper, WindingError};

const TOL: f64 = 1e-9;

fn cases() -> Vec<(f64, f64, f64, f64)> {
    vec![
        (0.0, 1.0, 1.0, 0.0),
        (0.25, 2.0, 1.0, 0.0),
        (-3.7, 0.5, 5.0, 1.25),
        (12.0, -1.5, 0.3, -2.0),
        (100.0, 7.0, 9.9, 10.0),
        (1e-3, 0.0, 2.0, 0.0),
    ]
}

#[test]
fn magnitude_equals_abs_y() {
    for (x, y, p, s) in cases() {
        let m = RingMapper::map(x, y, p, s).magnitude();
        assert!((m - y.abs()).abs() < TOL, "|map({x}, {y}, {p}, {s})| = {m}");
    }
}

#[test]
fn periodic_in_x() {
    for (x, y, p, s) in cases() {
        let a = RingMapper::map(x, y, p, s);
        let b = RingMapper::map(x + p, y, p, s);
        assert!((a.re - b.re).abs() < 1e-7, "re differs for x={x}, p={p}");
        assert!((a.im - b.im).abs() < 1e-7, "im differs for x={x}, p={p}");
    }
}

#[test]
fn quarter_turns() {
    let p = RingMapper::map(0.0, 2.0, 4.0, 0.0);
    assert!((p.re - 2.0).abs() < TOL && p.im.abs() < TOL);
    let p = RingMapper::map(1.0, 2.0, 4.0, 0.0);
    assert!(p.re.abs() < TOL && (p.im - 2.0).abs() < TOL);
    let p = RingMapper::map(2.0, 2.0, 4.0, 0.0);
    assert!((p.re + 2.0).abs() < TOL && p.im.abs() < TOL);
}

#[test]
fn shift_rotates_start() {
    // x = -shift lands at angle zero.
    let p = RingMapper::map(-3.0, 1.0, 8.0, 3.0);
    assert!((p.re - 1.0).abs() < TOL && p.im.abs() < TOL);
}

#[test]
fn negative_y_reflects_through_center() {
    let a = RingMapper::map(0.3, 1.0, 2.0, 0.0);
    let b = RingMapper::map(0.3, -1.0, 2.0, 0.0);
    assert!((a.re + b.re).abs() < TOL);
    assert!((a.im + b.im).abs() < TOL);
}

#[test]
fn zero_period_is_rejected_by_checked_map() {
    let err = RingMapper::try_map(1.0, 1.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, WindingError::InvalidPeriod { period, .. } if period == 0.0));
    assert!(RingMapper::try_map(1.0, 1.0, f64::NAN, 0.0).is_err());
    assert!(RingMapper::try_map(1.0, 1.0, 2.0, 0.0).is_ok());
}

#[test]
fn unchecked_zero_period_is_not_finite() {
    let p = RingMapper::map(1.0, 1.0, 0.0, 0.0);
    assert!(!p.re.is_finite() || !p.im.is_finite());
}
