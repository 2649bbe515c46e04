use ledger_chart::api::{ChartConfig, ChartModel, PieChartModel, PieChartStyle};
use ledger_chart::core::{PieDataset, PieSlice, SliceValueKind, Viewport};
use ledger_chart::render::{NullRenderer, PathCommand, Renderer, TextHAlign};

fn shop_costs() -> PieDataset {
    let slices = vec![
        PieSlice::new("Tesco", 155.37).expect("valid slice"),
        PieSlice::new("Sainsbury's", 89.12).expect("valid slice"),
        PieSlice::new("Morrisons", 44.50).expect("valid slice"),
        PieSlice::new("Corner shop", 3.20).expect("valid slice"),
        PieSlice::new("Vending machine", 0.85).expect("valid slice"),
    ];
    PieDataset::new(slices, SliceValueKind::Cost).expect("valid dataset")
}

#[test]
fn frame_renders_through_the_null_backend() {
    let dataset = shop_costs();
    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model")
        .with_title("Shop cost");

    let frame = model.build_frame().expect("frame builds");
    assert!(!frame.is_empty());

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("frame validates");
    assert_eq!(renderer.last_path_count, frame.paths.len());
    assert_eq!(renderer.last_text_count, frame.texts.len());
}

#[test]
fn sectors_are_arcs_from_the_pie_center() {
    let dataset = shop_costs();
    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model");

    let frame = model.build_frame().expect("frame builds");
    let sector_count = frame
        .paths
        .iter()
        .filter(|path| {
            path.fill.is_some()
                && path
                    .commands
                    .iter()
                    .any(|command| matches!(command, PathCommand::Arc { .. }))
        })
        .count();

    // The two sub-threshold shops merge, leaving four sectors.
    assert_eq!(sector_count, 4);
}

#[test]
fn merged_tail_is_labeled_other_with_currency_formatting() {
    let dataset = shop_costs();
    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model");

    let frame = model.build_frame().expect("frame builds");
    let other_label = frame
        .texts
        .iter()
        .find(|text| text.text.starts_with("Other"))
        .expect("Other label present");
    assert_eq!(other_label.text, "Other (£4.05)");

    assert!(
        frame
            .texts
            .iter()
            .any(|text| text.text == "Tesco (£155.37)")
    );
}

#[test]
fn count_datasets_format_without_currency() {
    let slices = vec![
        PieSlice::new("France", 7.0).expect("valid slice"),
        PieSlice::new("Spain", 4.0).expect("valid slice"),
    ];
    let dataset = PieDataset::new(slices, SliceValueKind::Count).expect("valid dataset");

    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model");
    let frame = model.build_frame().expect("frame builds");

    assert!(frame.texts.iter().any(|text| text.text == "France (7)"));
}

#[test]
fn long_labels_are_truncated() {
    let slices = vec![
        PieSlice::new("A very long supermarket receipt description", 10.0)
            .expect("valid slice"),
    ];
    let dataset = PieDataset::new(slices, SliceValueKind::Cost).expect("valid dataset");

    let style = PieChartStyle {
        label_max_chars: 10,
        ..PieChartStyle::default()
    };
    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model")
        .with_style(style);

    let frame = model.build_frame().expect("frame builds");
    assert!(frame.texts.iter().any(|text| text.text == "A very lon... (£10.00)"));
}

#[test]
fn title_is_drawn_top_right() {
    let dataset = shop_costs();
    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model")
        .with_title("Category cost");

    let frame = model.build_frame().expect("frame builds");
    let title = frame
        .texts
        .iter()
        .find(|text| text.text == "Category cost")
        .expect("title present");
    assert_eq!(title.h_align, TextHAlign::Right);
    assert_eq!(title.x, 490.0);
    assert_eq!(title.y, 10.0);
}

#[test]
fn empty_dataset_yields_only_the_title() {
    let dataset = PieDataset::new(Vec::new(), SliceValueKind::Cost).expect("empty dataset");
    let model = PieChartModel::new(&dataset, Viewport::new(500, 300), ChartConfig::default())
        .expect("valid model")
        .with_title("Holiday cost");

    let frame = model.build_frame().expect("frame builds");
    assert!(frame.paths.is_empty());
    assert_eq!(frame.texts.len(), 1);
}
