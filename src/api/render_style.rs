use crate::render::Color;

/// Style contract for every render frame.
///
/// Pixel metrics are logical pixels; the frame builder multiplies them by
/// the surface's device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub grid_line_color: Color,
    pub label_text_color: Color,
    pub grid_line_width_px: f64,
    pub series_line_width_px: f64,
    pub font_size_px: f64,
    /// Scale label offset from the left edge.
    pub scale_label_offset_x_px: f64,
    /// Scale label offset below its grid line.
    pub scale_label_offset_y_px: f64,
    /// Gap between a timestamp column and its rotated label.
    pub timestamp_label_offset_x_px: f64,
    /// Gap between a rotated timestamp label and the bottom edge.
    pub timestamp_label_padding_bottom_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::from_rgb8(0xe3, 0xe3, 0xe3),
            label_text_color: Color::rgb(0.0, 0.0, 0.0),
            grid_line_width_px: 1.0,
            series_line_width_px: 2.0,
            font_size_px: 10.0,
            scale_label_offset_x_px: 2.0,
            scale_label_offset_y_px: 2.0,
            timestamp_label_offset_x_px: 2.0,
            timestamp_label_padding_bottom_px: 4.0,
        }
    }
}
