use criterion::{Criterion, criterion_group, criterion_main};
use ledger_chart::core::{
    CardinalSpline, ChartRange, CoordinateMapper, DataPoint, Padding, PieDataset, PieSlice,
    SliceValueKind, Viewport, reduce, time_series_ticks,
};
use std::hint::black_box;

fn bench_spline_rasterize_10k(c: &mut Criterion) {
    let points: Vec<DataPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(t, 100.0 + (t * 0.01).sin() * 25.0 + t * 0.002)
        })
        .collect();
    let range = ChartRange::linear(0.0, 9_999.0, 0.0, 200.0).expect("valid range");
    let mapper = CoordinateMapper::new(range, Viewport::new(1920, 1080), Padding::default())
        .expect("valid mapper");
    let spline = CardinalSpline::fit(&points, 0.5).expect("valid fit");

    c.bench_function("spline_rasterize_10k", |b| {
        b.iter(|| {
            let curve = black_box(&spline)
                .rasterize(black_box(mapper))
                .expect("rasterize succeeds");
            black_box(curve);
        })
    });
}

fn bench_time_ticks_five_years(c: &mut Criterion) {
    let begin = 1_500_000_000;
    let end = begin + 86_400 * 365 * 5;

    c.bench_function("time_ticks_five_years", |b| {
        b.iter(|| {
            let ticks = time_series_ticks(black_box(begin), black_box(end));
            black_box(ticks);
        })
    });
}

fn bench_pie_reduce_1k(c: &mut Criterion) {
    let slices: Vec<PieSlice> = (0..1_000)
        .map(|i| {
            PieSlice::new(format!("slice-{i}"), 10_000.0 - i as f64 * 9.9)
                .expect("valid generated slice")
        })
        .collect();
    let dataset = PieDataset::new(slices, SliceValueKind::Cost).expect("valid dataset");

    c.bench_function("pie_reduce_1k", |b| {
        b.iter(|| {
            let reduced = reduce(black_box(&dataset), black_box(0.05)).expect("reduce succeeds");
            black_box(reduced);
        })
    });
}

criterion_group!(
    benches,
    bench_spline_rasterize_10k,
    bench_time_ticks_five_years,
    bench_pie_reduce_1k
);
criterion_main!(benches);
