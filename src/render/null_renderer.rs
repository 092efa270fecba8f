use crate::core::SurfaceMetrics;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It reports a configurable surface size and still validates every frame
/// so tests catch invalid geometry without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub surface: SurfaceMetrics,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn with_surface(width: u32, height: u32, pixel_ratio: f64) -> Self {
        Self {
            surface: SurfaceMetrics::new(width, height, pixel_ratio),
            ..Self::default()
        }
    }

    /// Simulates the host resizing the drawing surface.
    pub fn set_surface(&mut self, width: u32, height: u32, pixel_ratio: f64) {
        self.surface = SurfaceMetrics::new(width, height, pixel_ratio);
    }
}

impl Renderer for NullRenderer {
    fn surface(&self) -> ChartResult<SurfaceMetrics> {
        self.surface.validate()
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
