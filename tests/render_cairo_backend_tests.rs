#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chrono::{NaiveDate, NaiveDateTime};
use rolling_chart::core::ScalingMode;
use rolling_chart::render::{CairoContextRenderer, CairoRenderer, Renderer};
use rolling_chart::{ChartConfig, ChartError, RollingChart};

fn at(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|date| date.and_hms_opt(10, 0, second))
        .expect("valid time")
}

fn demo_config() -> ChartConfig {
    ChartConfig::new(["a", "b"])
        .with_unit("&deg;C")
        .with_interval_size(20.0)
        .with_value_domain(0.0, 50.0)
        .with_scaling_mode(ScalingMode::Fixed)
        .with_vertical_lines(true)
        .with_timestamps(true)
}

#[test]
fn cairo_renderer_rejects_invalid_surface() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::Surface(_)));

    let err = CairoRenderer::with_pixel_ratio(600, 300, 0.0).expect_err("invalid ratio");
    assert!(matches!(err, ChartError::Surface(_)));
}

#[test]
fn cairo_renderer_reports_device_surface_and_ratio() {
    let renderer = CairoRenderer::with_pixel_ratio(800, 400, 2.0).expect("renderer");
    let surface = renderer.surface().expect("surface");
    assert_eq!((surface.viewport.width, surface.viewport.height), (800, 400));
    assert_eq!(surface.logical_width(), 400.0);

    let chart = RollingChart::new(renderer, demo_config()).expect("chart init");
    assert_eq!(chart.capacity(), 21);
}

#[test]
fn cairo_renderer_draws_every_frame_primitive() {
    let renderer = CairoRenderer::new(600, 300).expect("renderer");
    let mut chart = RollingChart::new(renderer, demo_config()).expect("chart init");
    for tick in 0..5 {
        chart
            .update_at(&[f64::from(tick) * 5.0, 40.0], at(tick))
            .expect("update");
    }

    let frame = chart.build_render_frame().expect("frame");
    let stats = chart.renderer().last_stats();
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());
    // 31 vertical + 5 horizontal grid lines, 4 segments per series
    assert_eq!(stats.lines_drawn, 31 + 5 + 8);
}

#[test]
fn cairo_renderer_measures_text_with_pango() {
    let renderer = CairoRenderer::new(200, 100).expect("renderer");
    let short = renderer.measure_text_width("1", 10.0);
    let long = renderer.measure_text_width("100.00 °C", 10.0);
    assert!(short > 0.0);
    assert!(long > short);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(400, 200).expect("renderer");
    let mut chart = RollingChart::new(renderer, demo_config()).expect("chart init");
    chart.update_at(&[10.0, 20.0], at(0)).expect("update");
    chart.update_at(&[15.0, 25.0], at(1)).expect("update");

    let frame = chart.build_render_frame().expect("frame");
    let surface = ImageSurface::create(Format::ARgb32, 400, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .renderer_mut()
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    assert_eq!(chart.renderer().last_stats().lines_drawn, frame.lines.len());
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(120, 60).expect("renderer");
    let mut chart =
        RollingChart::new(renderer, ChartConfig::new(["a"])).expect("chart init");
    chart.update_at(&[1.0], at(0)).expect("update");
    chart.update_at(&[2.0], at(1)).expect("update");

    let mut png = Vec::new();
    chart.renderer().write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
