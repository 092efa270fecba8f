use chrono::format::{Item, StrftimeItems};

use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, RenderStyle};

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    if config.labels.is_empty() {
        return Err(ChartError::InvalidConfig(
            "chart needs at least one series label".to_owned(),
        ));
    }
    if !config.interval_size.is_finite() || config.interval_size <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "interval size must be finite and > 0".to_owned(),
        ));
    }
    if config.scale_steps == 0 {
        return Err(ChartError::InvalidConfig(
            "scale steps must be > 0".to_owned(),
        ));
    }
    if config.vertical_line_frequency == 0 {
        return Err(ChartError::InvalidConfig(
            "vertical line frequency must be > 0".to_owned(),
        ));
    }
    if StrftimeItems::new(&config.timestamp_format).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidConfig(format!(
            "invalid timestamp format `{}`",
            config.timestamp_format
        )));
    }
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    style.grid_line_color.validate()?;
    style.label_text_color.validate()?;

    for (name, value) in [
        ("grid line width", style.grid_line_width_px),
        ("series line width", style.series_line_width_px),
        ("font size", style.font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style {name} must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("scale label offset x", style.scale_label_offset_x_px),
        ("scale label offset y", style.scale_label_offset_y_px),
        ("timestamp label offset x", style.timestamp_label_offset_x_px),
        (
            "timestamp label bottom padding",
            style.timestamp_label_padding_bottom_px,
        ),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "render style {name} must be finite"
            )));
        }
    }
    Ok(())
}
