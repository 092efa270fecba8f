use tracing::debug;

use crate::core::{SampleBuffer, ValueBounds, ValueScale, derive_capacity};
use crate::error::ChartResult;
use crate::render::{Color, Palette, Renderer};

use super::label_format::decode_html_entities;
use super::validation::{validate_chart_config, validate_render_style};
use super::{ChartConfig, LegendSink, RenderStyle};

/// Real-time rolling line chart.
///
/// `RollingChart` owns the sample buffer, the value scale and the series
/// colors for one configuration epoch, and redraws the whole chart through
/// its renderer on every update.
pub struct RollingChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) unit_text: String,
    pub(super) buffer: SampleBuffer,
    pub(super) value_scale: ValueScale,
    pub(super) palette: Palette,
    pub(super) colors: Vec<Color>,
    pub(super) render_style: RenderStyle,
    pub(super) legend_sink: Option<Box<dyn LegendSink>>,
}

/// State derived from a config and the current surface.
pub(super) struct EpochState {
    pub(super) unit_text: String,
    pub(super) buffer: SampleBuffer,
    pub(super) value_scale: ValueScale,
}

impl<R: Renderer> RollingChart<R> {
    /// Creates a chart drawing through `renderer` with the default palette.
    ///
    /// Fails immediately when the renderer cannot report a usable surface.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::with_palette(renderer, config, Palette::default())
    }

    pub fn with_palette(renderer: R, config: ChartConfig, palette: Palette) -> ChartResult<Self> {
        let epoch = Self::derive_epoch(&renderer, &config)?;
        let colors = palette.assign(config.series_count());
        debug!(
            chart = %config.id,
            series = config.series_count(),
            capacity = epoch.buffer.capacity(),
            mode = ?config.scaling_mode,
            "rolling chart created"
        );

        Ok(Self {
            renderer,
            config,
            unit_text: epoch.unit_text,
            buffer: epoch.buffer,
            value_scale: epoch.value_scale,
            palette,
            colors,
            render_style: RenderStyle::default(),
            legend_sink: None,
        })
    }

    pub(super) fn derive_epoch(renderer: &R, config: &ChartConfig) -> ChartResult<EpochState> {
        validate_chart_config(config)?;
        let surface = renderer.surface()?.validate()?;
        let capacity = derive_capacity(surface.logical_width(), config.interval_size);

        Ok(EpochState {
            unit_text: decode_html_entities(&config.unit),
            buffer: SampleBuffer::new(config.series_count(), capacity)?,
            value_scale: ValueScale::new(
                config.scaling_mode,
                config.min_value,
                config.max_value,
            ),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.config.id
    }

    /// Unit text with HTML entities decoded.
    #[must_use]
    pub fn unit_text(&self) -> &str {
        &self.unit_text
    }

    #[must_use]
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn bounds(&self) -> ValueBounds {
        self.value_scale.bounds()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.render_style = style;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access for hosts that resize or reconfigure the surface;
    /// call `handle_resize` afterwards.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
