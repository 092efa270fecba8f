use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::SampleBuffer;

/// Fraction of the current span kept as headroom above/below the data.
pub const AUTOSCALE_HEADROOM_RATIO: f64 = 0.05;

/// Lower bound used when a fixed scale gets no usable minimum.
pub const DEFAULT_FIXED_MIN: f64 = 0.0;
/// Upper bound used when a fixed scale gets no usable maximum.
pub const DEFAULT_FIXED_MAX: f64 = 100.0;

/// Projected Y coordinates are kept within this many pixels of the surface
/// so far out-of-range samples still produce finite geometry.
pub const PIXEL_OVERSHOOT_LIMIT_PX: f64 = 1.0e6;

/// Policy governing whether and how vertical bounds follow incoming data.
///
/// Serialized as the integer codes `0`, `1` and `2`. Unknown codes collapse
/// to `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ScalingMode {
    /// Bounds never move after configuration.
    Fixed,
    /// Bounds only move outward, keeping headroom ahead of the data.
    #[default]
    AutoExpand,
    /// Bounds are recomputed from the visible window on every update.
    AutoFit,
}

impl ScalingMode {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Fixed => 0,
            Self::AutoExpand => 1,
            Self::AutoFit => 2,
        }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        !matches!(self, Self::Fixed)
    }
}

impl From<u8> for ScalingMode {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::AutoExpand,
            2 => Self::AutoFit,
            _ => Self::Fixed,
        }
    }
}

impl From<ScalingMode> for u8 {
    fn from(mode: ScalingMode) -> Self {
        mode.code()
    }
}

/// Current vertical-axis domain. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// Builds bounds from two finite values, swapping them when reversed.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Value sitting on grid line `step` out of `steps`, counted from `min`.
    #[must_use]
    pub fn step_value(self, step: usize, steps: usize) -> f64 {
        self.min + step as f64 * self.span() / steps as f64
    }
}

/// Maps a value onto an inverted Y pixel axis of `height` pixels.
///
/// `min` lands on `height`, `max` on `0`. Values outside the bounds map
/// outside the surface. A degenerate domain (`max == min`) has no slope, so
/// every value is drawn as a flat line at mid-height.
#[must_use]
pub fn scale_invert(value: f64, min: f64, max: f64, height: f64) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return height * 0.5;
    }
    (1.0 - (value - min) / span) * height
}

/// Bounds plus the mode that drives them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    mode: ScalingMode,
    bounds: ValueBounds,
}

impl ValueScale {
    /// Resolves initial bounds for one configuration epoch.
    ///
    /// Missing or non-finite bounds are replaced silently: a fixed scale
    /// falls back to `0..100`; auto modes start at `min..min` (defaulting
    /// `min` to `0`) and grow with the first sample.
    #[must_use]
    pub fn new(mode: ScalingMode, min_value: Option<f64>, max_value: Option<f64>) -> Self {
        let min = min_value
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_FIXED_MIN);
        let max = match max_value.filter(|value| value.is_finite()) {
            Some(max) => max,
            None if mode.is_auto() => min,
            None => DEFAULT_FIXED_MAX,
        };
        if min > max {
            warn!(min, max, "value scale bounds are reversed; swapping them");
        }

        Self {
            mode,
            bounds: ValueBounds::new(min, max),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ScalingMode {
        self.mode
    }

    #[must_use]
    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    /// Applies the scaling policy after `values` were shifted into `buffer`.
    pub fn observe(&mut self, values: &[f64], buffer: &SampleBuffer) {
        let window = buffer.finite_extrema();
        match self.mode {
            ScalingMode::Fixed => {}
            ScalingMode::AutoExpand => {
                if let Some(window) = window {
                    for &value in values.iter().filter(|value| value.is_finite()) {
                        self.expand_for(value, window);
                    }
                }
            }
            ScalingMode::AutoFit => {
                if let Some(window) = window {
                    self.fit_to(window);
                }
            }
        }
        trace!(
            min = self.bounds.min,
            max = self.bounds.max,
            mode = ?self.mode,
            "value scale observed samples"
        );
    }

    fn expand_for(&mut self, value: f64, (window_min, window_max): (f64, f64)) {
        let bounds = &mut self.bounds;
        if value < bounds.min {
            bounds.min = value;
        }
        if value > bounds.max {
            bounds.max = value;
        }

        let headroom = AUTOSCALE_HEADROOM_RATIO * (bounds.max - bounds.min).abs();
        if value > bounds.max - headroom {
            bounds.max = bounds.max.max(window_max.ceil() + headroom);
        }
        if value < bounds.min + headroom {
            bounds.min = bounds.min.min(window_min.floor() - headroom);
        }
    }

    fn fit_to(&mut self, (window_min, window_max): (f64, f64)) {
        let headroom = AUTOSCALE_HEADROOM_RATIO * (window_max - window_min);
        self.bounds = ValueBounds::new(
            window_min.floor() - headroom,
            window_max.ceil() + headroom,
        );
    }

    /// Maps a sample to a Y coordinate, clamped to
    /// `-PIXEL_OVERSHOOT_LIMIT_PX..=height + PIXEL_OVERSHOOT_LIMIT_PX`.
    #[must_use]
    pub fn value_to_pixel(&self, value: f64, height: f64) -> f64 {
        let y = scale_invert(value, self.bounds.min, self.bounds.max, height);
        if y.is_nan() {
            return height * 0.5;
        }
        y.clamp(-PIXEL_OVERSHOOT_LIMIT_PX, height + PIXEL_OVERSHOOT_LIMIT_PX)
    }
}
