use serde::{Deserialize, Serialize};

use crate::core::{GapPolicy, ScalingMode};
use crate::error::{ChartError, ChartResult};

/// Chart bootstrap configuration, fixed for one configuration epoch.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Only `labels` is required.
/// Legacy camelCase option names (`maxVal`, `vlines`,
/// `autoScaleMode`, ...) are accepted as aliases when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_id")]
    pub id: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_interval_size", alias = "intervalSize")]
    pub interval_size: f64,
    #[serde(default = "default_min_value", alias = "minVal")]
    pub min_value: Option<f64>,
    #[serde(default, alias = "maxVal")]
    pub max_value: Option<f64>,
    #[serde(default, alias = "vlines")]
    pub vertical_lines: bool,
    #[serde(default)]
    pub timestamps: bool,
    #[serde(default = "default_scale_steps", alias = "scalesteps")]
    pub scale_steps: usize,
    #[serde(default = "default_vertical_line_frequency", alias = "vlinesFrequency")]
    pub vertical_line_frequency: usize,
    #[serde(default, alias = "autoScaleMode")]
    pub scaling_mode: ScalingMode,
    #[serde(default)]
    pub gap_policy: GapPolicy,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl ChartConfig {
    /// Creates a config for the given series labels with default options.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: default_id(),
            labels: labels.into_iter().map(Into::into).collect(),
            unit: String::new(),
            interval_size: default_interval_size(),
            min_value: default_min_value(),
            max_value: None,
            vertical_lines: false,
            timestamps: false,
            scale_steps: default_scale_steps(),
            vertical_line_frequency: default_vertical_line_frequency(),
            scaling_mode: ScalingMode::default(),
            gap_policy: GapPolicy::default(),
            timestamp_format: default_timestamp_format(),
        }
    }

    /// Sets the identifier used as legend id prefix.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the unit text; HTML entities such as `&deg;` are decoded for display.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets sample spacing in logical (pre-scale) pixels.
    #[must_use]
    pub fn with_interval_size(mut self, interval_size: f64) -> Self {
        self.interval_size = interval_size;
        self
    }

    /// Sets both initial bounds.
    #[must_use]
    pub fn with_value_domain(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = Some(min_value);
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_min_value(mut self, min_value: Option<f64>) -> Self {
        self.min_value = min_value;
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: Option<f64>) -> Self {
        self.max_value = max_value;
        self
    }

    #[must_use]
    pub fn with_vertical_lines(mut self, enabled: bool) -> Self {
        self.vertical_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    #[must_use]
    pub fn with_scale_steps(mut self, scale_steps: usize) -> Self {
        self.scale_steps = scale_steps;
        self
    }

    #[must_use]
    pub fn with_vertical_line_frequency(mut self, frequency: usize) -> Self {
        self.vertical_line_frequency = frequency;
        self
    }

    #[must_use]
    pub fn with_scaling_mode(mut self, mode: ScalingMode) -> Self {
        self.scaling_mode = mode;
        self
    }

    #[must_use]
    pub fn with_gap_policy(mut self, policy: GapPolicy) -> Self {
        self.gap_policy = policy;
        self
    }

    /// Sets the chrono format string used for timestamp labels.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.labels.len()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to serialize config: {err}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse config: {err}")))
    }
}

fn default_id() -> String {
    "chart".to_owned()
}

fn default_interval_size() -> f64 {
    10.0
}

fn default_min_value() -> Option<f64> {
    Some(0.0)
}

fn default_scale_steps() -> usize {
    5
}

fn default_vertical_line_frequency() -> usize {
    1
}

fn default_timestamp_format() -> String {
    "%-H:%-M:%-S".to_owned()
}
