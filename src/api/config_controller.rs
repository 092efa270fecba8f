use tracing::debug;

use crate::core::{SampleBuffer, derive_capacity};
use crate::error::ChartResult;
use crate::render::{Color, Palette, Renderer};

use super::{ChartConfig, RollingChart};

impl<R: Renderer> RollingChart<R> {
    /// Applies a new configuration epoch.
    ///
    /// Buffered history and bounds are discarded; series colors are
    /// reassigned from the current palette and legends are rebuilt. On error
    /// the previous configuration stays in effect.
    pub fn update_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        let epoch = Self::derive_epoch(&self.renderer, &config)?;
        debug!(
            chart = %config.id,
            series = config.series_count(),
            capacity = epoch.buffer.capacity(),
            mode = ?config.scaling_mode,
            "rolling chart reconfigured"
        );

        self.colors = self.palette.assign(config.series_count());
        self.config = config;
        self.unit_text = epoch.unit_text;
        self.buffer = epoch.buffer;
        self.value_scale = epoch.value_scale;
        self.create_legends();
        Ok(())
    }

    /// Replaces the series palette; series `i` gets `colors[i % len]`.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> ChartResult<()> {
        self.palette = Palette::new(colors)?;
        self.colors = self.palette.assign(self.config.series_count());
        self.create_legends();
        Ok(())
    }

    /// `set_colors` for CSS-style hex strings such as `#e52b50`.
    pub fn set_colors_hex<S: AsRef<str>>(&mut self, colors: &[S]) -> ChartResult<()> {
        let palette = Palette::from_hex(colors)?;
        self.palette = palette;
        self.colors = self.palette.assign(self.config.series_count());
        self.create_legends();
        Ok(())
    }

    /// Re-derives capacity from the current surface width.
    ///
    /// When capacity changes the buffer is recreated empty: history is
    /// dropped rather than reflowed. Returns whether that happened.
    pub fn handle_resize(&mut self) -> ChartResult<bool> {
        let surface = self.renderer.surface()?.validate()?;
        let capacity = derive_capacity(surface.logical_width(), self.config.interval_size);
        if capacity == self.buffer.capacity() {
            return Ok(false);
        }

        debug!(
            chart = %self.config.id,
            previous = self.buffer.capacity(),
            capacity,
            "surface resized; discarding buffered samples"
        );
        self.buffer = SampleBuffer::new(self.config.series_count(), capacity)?;
        Ok(true)
    }
}
