use std::f64::consts::FRAC_PI_2;

use crate::core::{SurfaceMetrics, project_series_segments};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, Renderer, TextPrimitive};

use super::RollingChart;
use super::label_format::format_value_label;

impl<R: Renderer> RollingChart<R> {
    /// Materializes backend-agnostic primitives for one draw pass.
    ///
    /// Draw order: vertical grid, horizontal grid with value labels,
    /// timestamp labels, then one polyline per series. The surface is
    /// queried on every call so a resized surface is picked up immediately;
    /// capacity only changes through `handle_resize`.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let surface = self.renderer.surface()?.validate()?;
        let mut frame = RenderFrame::new(surface.viewport);
        let interval_px = self.slot_interval_px(surface);

        if self.config.vertical_lines {
            self.push_vertical_grid(&mut frame, surface, interval_px);
        }
        self.push_value_grid(&mut frame, surface);
        if self.config.timestamps {
            self.push_timestamp_labels(&mut frame, surface, interval_px);
        }
        self.push_series_lines(&mut frame, surface, interval_px);

        Ok(frame)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Blanks the surface without touching buffered samples.
    pub fn clear_surface(&mut self) -> ChartResult<()> {
        let surface = self.renderer.surface()?.validate()?;
        self.renderer.render(&RenderFrame::new(surface.viewport))
    }

    /// Horizontal distance between two adjacent slots in device pixels.
    #[must_use]
    pub fn slot_interval_px(&self, surface: SurfaceMetrics) -> f64 {
        surface.width() / (self.buffer.capacity().max(2) - 1) as f64
    }

    fn push_vertical_grid(&self, frame: &mut RenderFrame, surface: SurfaceMetrics, interval_px: f64) {
        let style = self.render_style;
        let stroke = style.grid_line_width_px * surface.pixel_ratio;
        let height = surface.height();

        let columns = (0..self.buffer.capacity())
            .rev()
            .step_by(self.config.vertical_line_frequency);
        for column in columns {
            let x = column as f64 * interval_px;
            frame.push_line(LinePrimitive::new(
                x,
                0.0,
                x,
                height,
                stroke,
                style.grid_line_color,
            ));
        }
    }

    fn push_value_grid(&self, frame: &mut RenderFrame, surface: SurfaceMetrics) {
        let style = self.render_style;
        let ratio = surface.pixel_ratio;
        let (width, height) = (surface.width(), surface.height());
        let steps = self.config.scale_steps;
        let bounds = self.value_scale.bounds();
        let step_px = height / steps as f64;

        for step in 1..=steps {
            let y = height - step as f64 * step_px;
            frame.push_line(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                style.grid_line_width_px * ratio,
                style.grid_line_color,
            ));
            frame.push_text(TextPrimitive::new(
                format_value_label(bounds.step_value(step, steps), &self.unit_text),
                style.scale_label_offset_x_px * ratio,
                y + style.scale_label_offset_y_px * ratio,
                style.font_size_px * ratio,
                style.label_text_color,
            ));
        }
    }

    /// First column whose timestamp label clears the widest value label
    /// drawn at the left edge.
    pub(super) fn first_timestamp_column(&self, surface: SurfaceMetrics, interval_px: f64) -> usize {
        let font_px = self.render_style.font_size_px * surface.pixel_ratio;
        let bounds = self.value_scale.bounds();
        let steps = self.config.scale_steps;
        let widest_px = (1..=steps)
            .map(|step| format_value_label(bounds.step_value(step, steps), &self.unit_text))
            .map(|label| self.renderer.measure_text_width(&label, font_px))
            .fold(0.0, f64::max);
        let bound = (widest_px / interval_px + 1.0).floor();
        if bound.is_finite() && bound > 0.0 {
            bound as usize
        } else {
            0
        }
    }

    fn push_timestamp_labels(
        &self,
        frame: &mut RenderFrame,
        surface: SurfaceMetrics,
        interval_px: f64,
    ) {
        let style = self.render_style;
        let ratio = surface.pixel_ratio;
        let font_px = style.font_size_px * ratio;
        let first_column = self.first_timestamp_column(surface, interval_px);

        for (column, label) in self
            .buffer
            .timestamps()
            .iter()
            .enumerate()
            .skip(first_column)
            .rev()
        {
            if label.is_empty() {
                continue;
            }
            let x = column as f64 * interval_px;
            let text_width = self.renderer.measure_text_width(label, font_px);
            let top = surface.height() - text_width - style.timestamp_label_padding_bottom_px * ratio;
            frame.push_text(
                TextPrimitive::new(
                    label.clone(),
                    x - style.timestamp_label_offset_x_px * ratio,
                    top,
                    font_px,
                    style.label_text_color,
                )
                .with_rotation(FRAC_PI_2),
            );
        }
    }

    fn push_series_lines(&self, frame: &mut RenderFrame, surface: SurfaceMetrics, interval_px: f64) {
        let stroke = self.render_style.series_line_width_px * surface.pixel_ratio;
        let height = surface.height();

        for (series, color) in self.buffer.iter_series().zip(&self.colors) {
            let segments = project_series_segments(
                series,
                interval_px,
                self.config.gap_policy,
                |value| self.value_scale.value_to_pixel(value, height),
            );
            for segment in segments {
                frame.push_line(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    stroke,
                    *color,
                ));
            }
        }
    }
}
