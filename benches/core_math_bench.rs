use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use rolling_chart::core::{GapPolicy, SampleBuffer, ScalingMode, project_series_segments, scale_invert};
use rolling_chart::render::NullRenderer;
use rolling_chart::{ChartConfig, RollingChart};
use std::hint::black_box;

fn bench_scale_invert(c: &mut Criterion) {
    c.bench_function("scale_invert", |b| {
        b.iter(|| scale_invert(black_box(4_321.123), black_box(-50.0), black_box(10_000.0), 1080.0))
    });
}

fn bench_buffer_push_column_8x1000(c: &mut Criterion) {
    let mut buffer = SampleBuffer::new(8, 1_000).expect("valid buffer");
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

    c.bench_function("buffer_push_column_8x1000", |b| {
        b.iter(|| {
            buffer
                .push_column(black_box(&values), "12:00:00")
                .expect("matching series count");
        })
    });
}

fn bench_series_projection_1k(c: &mut Criterion) {
    let samples: Vec<f64> = (0..1_000).map(|i| (i as f64 * 0.01).sin() * 50.0).collect();

    c.bench_function("series_projection_1k", |b| {
        b.iter(|| {
            project_series_segments(black_box(&samples), 1.5, GapPolicy::Gap, |value| {
                scale_invert(value, -60.0, 60.0, 1080.0)
            })
        })
    });
}

fn bench_chart_update_autofit(c: &mut Criterion) {
    let config = ChartConfig::new(["a", "b", "c", "d"])
        .with_interval_size(2.0)
        .with_timestamps(true)
        .with_vertical_lines(true)
        .with_vertical_line_frequency(10)
        .with_scaling_mode(ScalingMode::AutoFit);
    let mut chart = RollingChart::new(NullRenderer::with_surface(1920, 1080, 1.0), config)
        .expect("chart init");
    let time = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid time");
    let mut tick = 0.0_f64;

    c.bench_function("chart_update_autofit_4x961", |b| {
        b.iter(|| {
            tick += 0.1;
            let values = [tick.sin(), tick.cos(), tick.sin() * 2.0, tick.cos() * 3.0];
            chart.update_at(black_box(&values), time).expect("update");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_invert,
    bench_buffer_push_column_8x1000,
    bench_series_projection_1k,
    bench_chart_update_autofit
);
criterion_main!(benches);
