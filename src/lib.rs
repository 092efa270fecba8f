//! rolling-chart: real-time rolling line charts for any 2D drawing surface.
//!
//! A [`RollingChart`] keeps a fixed-width window of samples per series,
//! auto-scales the value axis and redraws on every update. Drawing goes
//! through the [`render::Renderer`] seam; legend markup through
//! [`api::LegendSink`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, RollingChart};
pub use error::{ChartError, ChartResult};
