use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};
use crate::interaction::{
    DEFAULT_DYNAMIC_ZOOM_THRESHOLD_PX, DEFAULT_ZOOM_RATIO, GestureSettings, ZoomGestureType,
};

use super::AxisConfig;
use super::history::DEFAULT_HISTORY_LIMIT;

/// Public plot bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the axis
/// setup and gesture tuning in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyPlotConfig {
    #[serde(default)]
    pub axes: Vec<AxisConfig>,
    #[serde(default)]
    pub gesture_type: ZoomGestureType,
    #[serde(default = "default_zoom_ratio")]
    pub zoom_ratio: f64,
    #[serde(default = "default_zoom_repeat_interval_ms")]
    pub zoom_repeat_interval_ms: u64,
    #[serde(default = "default_dynamic_zoom_threshold_px")]
    pub dynamic_zoom_threshold_px: i32,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for XyPlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl XyPlotConfig {
    /// Creates a config without axes and with default gesture tuning.
    #[must_use]
    pub fn new() -> Self {
        Self {
            axes: Vec::new(),
            gesture_type: ZoomGestureType::None,
            zoom_ratio: default_zoom_ratio(),
            zoom_repeat_interval_ms: default_zoom_repeat_interval_ms(),
            dynamic_zoom_threshold_px: default_dynamic_zoom_threshold_px(),
            history_limit: default_history_limit(),
        }
    }

    /// Primary X axis `0` and primary Y axis `1`, both spanning `(0, 100)`.
    #[must_use]
    pub fn with_primary_axes(self, width_px: i32, height_px: i32) -> Self {
        self.with_axis(AxisConfig::horizontal(0).with_pixel_length(width_px))
            .with_axis(AxisConfig::vertical(1).with_pixel_length(height_px))
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_gesture_type(mut self, gesture_type: ZoomGestureType) -> Self {
        self.gesture_type = gesture_type;
        self
    }

    #[must_use]
    pub fn with_zoom_ratio(mut self, zoom_ratio: f64) -> Self {
        self.zoom_ratio = zoom_ratio;
        self
    }

    #[must_use]
    pub fn with_zoom_repeat_interval_ms(mut self, interval_ms: u64) -> Self {
        self.zoom_repeat_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_dynamic_zoom_threshold_px(mut self, threshold_px: i32) -> Self {
        self.dynamic_zoom_threshold_px = threshold_px;
        self
    }

    /// Sets how many gesture commits undo remembers; `0` disables history.
    #[must_use]
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        GestureSettings {
            zoom_ratio: self.zoom_ratio,
            zoom_repeat_interval: Duration::from_millis(self.zoom_repeat_interval_ms),
            dynamic_zoom_threshold_px: self.dynamic_zoom_threshold_px,
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_zoom_ratio() -> f64 {
    DEFAULT_ZOOM_RATIO
}

fn default_zoom_repeat_interval_ms() -> u64 {
    200
}

fn default_dynamic_zoom_threshold_px() -> i32 {
    DEFAULT_DYNAMIC_ZOOM_THRESHOLD_PX
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
