mod chart;
mod chart_config;
mod config_controller;
mod data_controller;
mod label_format;
mod legend;
mod legend_dispatch;
mod render_frame_builder;
mod render_style;
mod validation;

pub use chart::RollingChart;
pub use chart_config::ChartConfig;
pub use label_format::{decode_html_entities, format_timestamp_label, format_value_label};
pub use legend::{LegendEntry, LegendSink, legend_entry_id};
pub use legend_dispatch::switch_graph;
pub use render_style::RenderStyle;
