use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Per-series data an external legend needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Stable identifier, `{chart id}{label without whitespace}value`.
    pub id: String,
    pub label: String,
    pub color: Color,
    /// Latest sample as `"{value:.2} {unit}"`, `None` before the first sample.
    pub value_text: Option<String>,
}

impl LegendEntry {
    /// Identifier of the color swatch belonging to this entry.
    #[must_use]
    pub fn color_id(&self) -> String {
        format!("{}color", self.id)
    }
}

#[must_use]
pub fn legend_entry_id(chart_id: &str, label: &str) -> String {
    let compact: String = label.chars().filter(|ch| !ch.is_whitespace()).collect();
    format!("{chart_id}{compact}value")
}

/// External collaborator that owns legend markup (DOM, widget tree, ...).
///
/// The chart never builds markup itself; it calls `create_legends` when the
/// series set or colors change and `update_legends` after every sample.
pub trait LegendSink {
    fn create_legends(&mut self, chart_id: &str, entries: &[LegendEntry]);
    fn update_legends(&mut self, chart_id: &str, entries: &[LegendEntry]);
}
