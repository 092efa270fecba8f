pub mod line_series;
pub mod sample_buffer;
pub mod types;
pub mod value_scale;

pub use line_series::{GapPolicy, LineSegment, project_series_segments};
pub use sample_buffer::{ABSENT_SAMPLE, SampleBuffer};
pub use types::{SurfaceMetrics, Viewport};
pub use value_scale::{
    AUTOSCALE_HEADROOM_RATIO, PIXEL_OVERSHOOT_LIMIT_PX, ScalingMode, ValueBounds, ValueScale,
    scale_invert,
};

/// Number of visible slots for a surface `logical_width` pixels wide.
///
/// `round(width / interval) + 1`, never fewer than two slots so the slot
/// spacing `width / (capacity - 1)` stays defined.
#[must_use]
pub fn derive_capacity(logical_width: f64, interval_size: f64) -> usize {
    let slots = (logical_width / interval_size).round();
    if !slots.is_finite() || slots < 1.0 {
        return 2;
    }
    slots as usize + 1
}
