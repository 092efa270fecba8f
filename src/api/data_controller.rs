use chrono::{Local, NaiveDateTime};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::RollingChart;
use super::label_format::format_timestamp_label;

impl<R: Renderer> RollingChart<R> {
    /// Pushes one sample per series (in label order), stamped with the local
    /// wall-clock time, and redraws the chart.
    pub fn update(&mut self, values: &[f64]) -> ChartResult<()> {
        self.update_at(values, Local::now().naive_local())
    }

    /// Same as `update`, with an explicit sampling time for the timestamp
    /// label.
    ///
    /// The value count is checked before any state changes. Once the buffer
    /// has advanced, a renderer failure is reported but the new samples stay
    /// buffered.
    pub fn update_at(&mut self, values: &[f64], time: NaiveDateTime) -> ChartResult<()> {
        let expected = self.buffer.series_count();
        if values.len() != expected {
            return Err(ChartError::SeriesCountMismatch {
                expected,
                actual: values.len(),
            });
        }

        let label = format_timestamp_label(time, &self.config.timestamp_format);
        self.buffer.push_column(values, label)?;
        self.value_scale.observe(values, &self.buffer);
        let bounds = self.value_scale.bounds();
        trace!(
            chart = %self.config.id,
            min = bounds.min,
            max = bounds.max,
            "rolling chart update"
        );

        self.render()?;
        self.notify_legend_values();
        Ok(())
    }
}
