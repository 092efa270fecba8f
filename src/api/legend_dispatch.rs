use crate::error::ChartResult;
use crate::render::Renderer;

use super::label_format::format_value_label;
use super::legend::legend_entry_id;
use super::{LegendEntry, LegendSink, RollingChart};

impl<R: Renderer> RollingChart<R> {
    /// Attaches the collaborator that owns legend markup and builds it once.
    pub fn set_legend_sink(&mut self, sink: Box<dyn LegendSink>) {
        self.legend_sink = Some(sink);
        self.create_legends();
    }

    pub fn take_legend_sink(&mut self) -> Option<Box<dyn LegendSink>> {
        self.legend_sink.take()
    }

    /// Per-series id, label, color and latest formatted value.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.config
            .labels
            .iter()
            .zip(&self.colors)
            .enumerate()
            .map(|(index, (label, color))| LegendEntry {
                id: legend_entry_id(&self.config.id, label),
                label: label.clone(),
                color: *color,
                value_text: self
                    .buffer
                    .latest(index)
                    .map(|value| format_value_label(value, &self.unit_text)),
            })
            .collect()
    }

    /// Asks the legend sink, if any, to rebuild its markup.
    pub fn create_legends(&mut self) {
        let entries = self.legend_entries();
        if let Some(sink) = self.legend_sink.as_mut() {
            sink.create_legends(&self.config.id, &entries);
        }
    }

    pub(super) fn notify_legend_values(&mut self) {
        if self.legend_sink.is_none() {
            return;
        }
        let entries = self.legend_entries();
        if let Some(sink) = self.legend_sink.as_mut() {
            sink.update_legends(&self.config.id, &entries);
        }
    }
}

/// Hands shared display space from `previous` to `next`.
///
/// The previous chart's surface is blanked and the next chart's legends are
/// rebuilt. Neither chart's buffered samples change, so a backgrounded chart
/// can keep receiving updates and be switched back later.
pub fn switch_graph<A: Renderer, B: Renderer>(
    previous: &mut RollingChart<A>,
    next: &mut RollingChart<B>,
) -> ChartResult<()> {
    previous.clear_surface()?;
    next.create_legends();
    Ok(())
}
