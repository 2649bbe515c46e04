use ledger_chart::core::{ChartRange, RangeContinuity};
use ledger_chart::error::RangeError;

#[test]
fn degenerate_spans_are_rejected() {
    assert!(ChartRange::linear(5.0, 5.0, 0.0, 1.0).is_err());
    assert!(ChartRange::linear(0.0, 1.0, 3.0, 3.0).is_err());
    assert!(ChartRange::linear(1.0, 0.0, 0.0, 1.0).is_err());
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(ChartRange::linear(f64::NAN, 1.0, 0.0, 1.0).is_err());
    assert!(ChartRange::linear(0.0, f64::INFINITY, 0.0, 1.0).is_err());
}

#[test]
fn log_range_must_be_strictly_positive() {
    assert!(ChartRange::new(0.0, 1.0, 0.0, 10.0, true).is_err());
    assert!(ChartRange::new(0.0, 1.0, -1.0, 10.0, true).is_err());
    assert!(ChartRange::new(0.0, 1.0, 0.5, 10.0, true).is_ok());

    // The same bounds are fine on a linear scale.
    assert!(ChartRange::new(0.0, 1.0, 0.0, 10.0, false).is_ok());
}

#[test]
fn invalid_bounds_error_carries_the_offending_values() {
    let err = ChartRange::new(0.0, 1.0, 0.0, 10.0, true).expect_err("log range spanning zero");
    let RangeError::InvalidBounds { min_y, log_y, .. } = err;
    assert_eq!(min_y, 0.0);
    assert!(log_y);
}

#[test]
fn continuity_keeps_the_last_good_range() {
    let mut continuity = RangeContinuity::new();

    let good = continuity
        .resolve(ChartRange::linear(0.0, 10.0, 0.0, 5.0))
        .expect("first range is valid");
    assert_eq!(good.max_x(), 10.0);

    // A collapsed zoom falls back instead of snapping.
    let fallback = continuity
        .resolve(ChartRange::linear(3.0, 3.0, 0.0, 5.0))
        .expect("fallback to last good");
    assert_eq!(fallback, good);

    // A later valid range replaces the cache.
    let updated = continuity
        .resolve(ChartRange::linear(2.0, 8.0, 0.0, 5.0))
        .expect("new valid range");
    assert_eq!(continuity.last_good(), Some(updated));
}

#[test]
fn continuity_with_no_history_propagates_the_error() {
    let mut continuity = RangeContinuity::new();
    assert!(
        continuity
            .resolve(ChartRange::linear(1.0, 1.0, 0.0, 1.0))
            .is_err()
    );
}
