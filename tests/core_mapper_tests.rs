use ledger_chart::core::{ChartRange, CoordinateMapper, Padding, Viewport};

#[test]
fn x_round_trip_within_tolerance() {
    let range = ChartRange::linear(0.0, 100.0, 0.0, 50.0).expect("valid range");
    let mapper = CoordinateMapper::new(
        range,
        Viewport::new(1000, 600),
        Padding::new(10.0, 20.0, 30.0, 40.0),
    )
    .expect("valid mapper");

    let original = 42.5;
    let px = mapper.pix_x(original).expect("to pixel");
    let recovered = mapper.val_x(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn y_axis_is_inverted() {
    let range = ChartRange::linear(0.0, 1.0, 10.0, 110.0).expect("valid range");
    let mapper = CoordinateMapper::new(range, Viewport::new(800, 600), Padding::default())
        .expect("valid mapper");

    let top = mapper.pix_y(110.0).expect("top pixel");
    let bottom = mapper.pix_y(10.0).expect("bottom pixel");

    assert_eq!(top, 0.0);
    assert_eq!(bottom, 600.0);
}

#[test]
fn padding_shifts_the_plot_area() {
    let range = ChartRange::linear(0.0, 10.0, 0.0, 10.0).expect("valid range");
    let mapper = CoordinateMapper::new(
        range,
        Viewport::new(100, 100),
        Padding::new(5.0, 10.0, 15.0, 20.0),
    )
    .expect("valid mapper");

    assert_eq!(mapper.pix_x(0.0).expect("left edge"), 20.0);
    assert_eq!(mapper.pix_x(10.0).expect("right edge"), 90.0);
    assert_eq!(mapper.pix_y(0.0).expect("bottom edge"), 85.0);
    assert_eq!(mapper.pix_y(10.0).expect("top edge"), 5.0);
}

#[test]
fn log_mapping_round_trips() {
    let range = ChartRange::new(0.0, 1.0, 1.0, 1000.0, true).expect("valid log range");
    let mapper = CoordinateMapper::new(range, Viewport::new(400, 300), Padding::default())
        .expect("valid mapper");

    let px = mapper.pix_y(100.0).expect("to pixel");
    let recovered = mapper.val_y(px).expect("from pixel");
    assert!((recovered - 100.0).abs() <= 1e-9);

    // Log spacing: equal ratios map to equal pixel distances.
    let p1 = mapper.pix_y(1.0).expect("p1");
    let p10 = mapper.pix_y(10.0).expect("p10");
    let p100 = mapper.pix_y(100.0).expect("p100");
    assert!(((p1 - p10) - (p10 - p100)).abs() <= 1e-9);
}

#[test]
fn log_mapping_rejects_non_positive_values() {
    let range = ChartRange::new(0.0, 1.0, 1.0, 1000.0, true).expect("valid log range");
    let mapper = CoordinateMapper::new(range, Viewport::new(400, 300), Padding::default())
        .expect("valid mapper");

    assert!(mapper.pix_y(0.0).is_err());
    assert!(mapper.pix_y(-5.0).is_err());
}

#[test]
fn invalid_viewport_is_rejected() {
    let range = ChartRange::linear(0.0, 1.0, 0.0, 1.0).expect("valid range");
    let result = CoordinateMapper::new(range, Viewport::new(0, 0), Padding::default());
    assert!(result.is_err());
}

#[test]
fn padding_swallowing_the_viewport_is_rejected() {
    let range = ChartRange::linear(0.0, 1.0, 0.0, 1.0).expect("valid range");
    let result = CoordinateMapper::new(range, Viewport::new(100, 100), Padding::uniform(60.0));
    assert!(result.is_err());
}
