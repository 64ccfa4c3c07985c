use criterion::{Criterion, criterion_group, criterion_main};
use graph_view::api::{LineGraphConfig, SeriesRenderRequest, SeriesRenderer, SeriesStyle};
use graph_view::core::{AxisWindow, BackgroundFillMode, DataPoint, PlotArea, PlotMapping};
use graph_view::render::RenderFrame;
use std::hint::black_box;

fn sample_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, 100.0 + (x * 0.05).sin() * 40.0)
        })
        .collect()
}

fn bench_mapping_round_trip(c: &mut Criterion) {
    let mapping = PlotMapping::new(
        PlotArea::new(1920.0, 1080.0, 20.0, 60.0),
        AxisWindow::new(0.0, 0.0, 10_000.0, 500.0),
    );

    c.bench_function("mapping_round_trip", |b| {
        b.iter(|| {
            let px = mapping.screen_x(black_box(4_321.123));
            let _ = mapping.data_x_at(px);
        })
    });
}

fn bench_series_10k(c: &mut Criterion, name: &str, mode: BackgroundFillMode) {
    let points = sample_points(10_000);
    let plot = PlotArea::new(1920.0, 1080.0, 20.0, 60.0);
    let axes = AxisWindow::fit_points(&points).expect("non-empty sample");
    let request = SeriesRenderRequest::new(plot, axes, SeriesStyle::default());
    let renderer = SeriesRenderer::new(
        LineGraphConfig::default()
            .with_background(true)
            .with_background_fill_mode(mode)
            .with_markers(true),
    );

    c.bench_function(name, |b| {
        b.iter(|| {
            let mut frame = RenderFrame::new(plot);
            let mut anchors = Vec::new();
            renderer.render_series(
                "bench",
                black_box(&points),
                black_box(&request),
                &mut frame,
                &mut anchors,
            );
            frame
        })
    });
}

fn bench_series_polygon_10k(c: &mut Criterion) {
    bench_series_10k(c, "series_polygon_fill_10k", BackgroundFillMode::Polygon);
}

fn bench_series_curtain_10k(c: &mut Criterion) {
    bench_series_10k(c, "series_curtain_fill_10k", BackgroundFillMode::Curtain);
}

criterion_group!(
    benches,
    bench_mapping_round_trip,
    bench_series_polygon_10k,
    bench_series_curtain_10k
);
criterion_main!(benches);
