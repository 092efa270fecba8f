use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing-surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Result of a surface size query: device-pixel viewport plus the ratio
/// between device pixels and logical (pre-scale) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub viewport: Viewport,
    pub pixel_ratio: f64,
}

impl SurfaceMetrics {
    #[must_use]
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            pixel_ratio,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        f64::from(self.viewport.width)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        f64::from(self.viewport.height)
    }

    /// Surface width before device pixel scaling.
    #[must_use]
    pub fn logical_width(self) -> f64 {
        self.width() / self.pixel_ratio
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(ChartError::Surface(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self::new(600, 300, 1.0)
    }
}
