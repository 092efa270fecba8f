mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod text_metrics;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{DEFAULT_PALETTE, Palette};
pub use primitives::{Color, LinePrimitive, TextPrimitive};
pub use text_metrics::estimate_text_width_px;

use crate::core::SurfaceMetrics;
use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends answer size and text-measure queries and receive a fully
/// materialized, deterministic `RenderFrame`, so drawing code stays isolated
/// from buffering and scaling logic. Rendering a frame replaces the whole
/// surface content.
pub trait Renderer {
    /// Current surface size in device pixels plus the device pixel ratio.
    fn surface(&self) -> ChartResult<SurfaceMetrics>;

    /// Width in pixels of `text` drawn at `font_size_px`.
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        estimate_text_width_px(text, font_size_px)
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
