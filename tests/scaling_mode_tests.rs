use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};
use rolling_chart::api::{ChartConfig, RollingChart};
use rolling_chart::core::{PIXEL_OVERSHOOT_LIMIT_PX, ScalingMode, ValueBounds};
use rolling_chart::render::NullRenderer;

fn at(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|date| date.and_hms_opt(8, 0, second))
        .expect("valid time")
}

fn build_chart(config: ChartConfig) -> RollingChart<NullRenderer> {
    RollingChart::new(NullRenderer::with_surface(40, 100, 1.0), config.with_interval_size(10.0))
        .expect("chart init")
}

#[test]
fn fixed_mode_keeps_bounds_and_draws_out_of_range_values_beyond_grid() {
    let config = ChartConfig::new(["A", "B"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::Fixed);
    let mut chart = build_chart(config);

    chart.update_at(&[5.0, 12.0], at(0)).expect("update");
    chart.update_at(&[5.0, 12.0], at(1)).expect("update");

    assert_eq!(chart.bounds(), ValueBounds { min: 0.0, max: 10.0 });
    assert_eq!(chart.buffer().latest(1), Some(12.0));

    let frame = chart.renderer().last_frame.clone().expect("rendered frame");
    let series_b_color = chart.colors()[1];
    let clipped: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.color == series_b_color)
        .collect();
    assert_eq!(clipped.len(), 1);
    // 12 on a 0..10 axis of 100px sits 20px above the top edge.
    assert_relative_eq!(clipped[0].y1, -20.0, epsilon = 1e-9);
}

#[test]
fn fixed_mode_accepts_values_far_beyond_the_domain() {
    let config = ChartConfig::new(["A"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::Fixed);
    let mut chart = build_chart(config);

    chart.update_at(&[1e308], at(0)).expect("huge sample is drawn");
    chart.update_at(&[5.0], at(1)).expect("update");
    chart.update_at(&[5.0], at(2)).expect("update");

    assert_eq!(chart.bounds(), ValueBounds { min: 0.0, max: 10.0 });
    let frame = chart.renderer().last_frame.clone().expect("rendered frame");
    let series_color = chart.colors()[0];
    let segments: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.color == series_color)
        .collect();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].y1, -PIXEL_OVERSHOOT_LIMIT_PX);
    assert_relative_eq!(segments[1].y2, 50.0, epsilon = 1e-9);
}

#[test]
fn fixed_mode_without_bounds_defaults_to_zero_hundred() {
    let config = ChartConfig::new(["A"])
        .with_min_value(None)
        .with_max_value(Some(f64::INFINITY))
        .with_scaling_mode(ScalingMode::Fixed);
    let chart = build_chart(config);
    assert_eq!(chart.bounds(), ValueBounds { min: 0.0, max: 100.0 });
}

#[test]
fn auto_expand_adds_headroom_when_value_nears_max() {
    let config = ChartConfig::new(["A"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::AutoExpand);
    let mut chart = build_chart(config);

    chart.update_at(&[9.6], at(0)).expect("update");

    assert_relative_eq!(chart.bounds().max, 10.5, epsilon = 1e-12);
    assert_relative_eq!(chart.bounds().min, 0.0, epsilon = 1e-12);
}

#[test]
fn auto_expand_ignores_values_well_inside_bounds() {
    let config = ChartConfig::new(["A"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::AutoExpand);
    let mut chart = build_chart(config);

    chart.update_at(&[5.0], at(0)).expect("update");
    assert_eq!(chart.bounds(), ValueBounds { min: 0.0, max: 10.0 });
}

#[test]
fn auto_expand_grows_downward_for_negative_spikes() {
    let config = ChartConfig::new(["A"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::AutoExpand);
    let mut chart = build_chart(config);

    chart.update_at(&[-3.5], at(0)).expect("update");

    // min jumps to -3.5, delta = 13.5, then floor(-3.5) - 0.675
    assert_relative_eq!(chart.bounds().min, -4.675, epsilon = 1e-12);
    assert_relative_eq!(chart.bounds().max, 10.0, epsilon = 1e-12);
}

#[test]
fn auto_expand_keeps_headroom_after_spike_leaves_window() {
    let config = ChartConfig::new(["A"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::AutoExpand);
    let mut chart = build_chart(config);

    chart.update_at(&[50.0], at(0)).expect("update");
    let after_spike = chart.bounds();
    for tick in 1..10 {
        chart.update_at(&[30.0], at(tick)).expect("update");
    }

    assert_eq!(chart.bounds(), after_spike);
    assert!(after_spike.max > 50.0);
}

#[test]
fn auto_expand_without_initial_max_grows_from_first_sample() {
    let config = ChartConfig::new(["A"]).with_scaling_mode(ScalingMode::AutoExpand);
    let mut chart = build_chart(config);
    assert_eq!(chart.bounds(), ValueBounds { min: 0.0, max: 0.0 });

    chart.update_at(&[5.0], at(0)).expect("update");
    assert_relative_eq!(chart.bounds().max, 5.25, epsilon = 1e-12);
}

#[test]
fn auto_fit_tracks_the_visible_window_in_both_directions() {
    let config = ChartConfig::new(["A"])
        .with_value_domain(0.0, 10.0)
        .with_scaling_mode(ScalingMode::AutoFit);
    let mut chart = build_chart(config);

    for (tick, value) in [3.2, 7.7, -1.4].into_iter().enumerate() {
        chart.update_at(&[value], at(tick as u32)).expect("update");
    }
    assert_relative_eq!(chart.bounds().min, -2.455, epsilon = 1e-9);
    assert_relative_eq!(chart.bounds().max, 8.455, epsilon = 1e-9);

    for (tick, value) in [2.0, 2.5, 2.0, 2.5, 2.0].into_iter().enumerate() {
        chart.update_at(&[value], at(10 + tick as u32)).expect("update");
    }
    assert_relative_eq!(chart.bounds().min, 1.975, epsilon = 1e-9);
    assert_relative_eq!(chart.bounds().max, 3.025, epsilon = 1e-9);
}

#[test]
fn auto_fit_spans_every_series() {
    let config = ChartConfig::new(["A", "B"]).with_scaling_mode(ScalingMode::AutoFit);
    let mut chart = build_chart(config);

    chart.update_at(&[1.0, 9.0], at(0)).expect("update");

    assert_relative_eq!(chart.bounds().min, 0.6, epsilon = 1e-9);
    assert_relative_eq!(chart.bounds().max, 9.4, epsilon = 1e-9);
}

#[test]
fn flat_window_draws_mid_height_line() {
    let config = ChartConfig::new(["A"]).with_scaling_mode(ScalingMode::AutoFit);
    let mut chart = build_chart(config);

    chart.update_at(&[5.0], at(0)).expect("update");
    chart.update_at(&[5.0], at(1)).expect("update");

    assert!(chart.bounds().min <= chart.bounds().max);
    let frame = chart.build_render_frame().expect("frame");
    let series_color = chart.colors()[0];
    let series: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.color == series_color)
        .collect();
    assert_eq!(series.len(), 1);
    assert_eq!((series[0].y1, series[0].y2), (50.0, 50.0));
}
