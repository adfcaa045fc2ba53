use serde::{Deserialize, Serialize};

use crate::core::{
    AutoscaleVariant, AxisId, AxisRangeController, DEFAULT_AUTO_SCALE_THRESHOLD, Orientation,
};
use crate::error::AxisResult;

use super::validation::validate_axis_config;

/// Serializable bootstrap configuration of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub id: AxisId,
    pub orientation: Orientation,
    pub lower: f64,
    pub upper: f64,
    #[serde(default = "default_pixel_length")]
    pub pixel_length: i32,
    #[serde(default)]
    pub margin: i32,
    #[serde(default)]
    pub log_scale: bool,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub auto_scale: bool,
    #[serde(default = "default_auto_scale_threshold")]
    pub auto_scale_threshold: f64,
    #[serde(default)]
    pub autoscale_variant: AutoscaleVariant,
}

impl AxisConfig {
    /// Creates a linear axis spanning `(0, 100)` over 100 pixels.
    #[must_use]
    pub fn new(id: AxisId, orientation: Orientation) -> Self {
        Self {
            id,
            orientation,
            lower: 0.0,
            upper: 100.0,
            pixel_length: default_pixel_length(),
            margin: 0,
            log_scale: false,
            inverted: false,
            auto_scale: false,
            auto_scale_threshold: default_auto_scale_threshold(),
            autoscale_variant: AutoscaleVariant::default(),
        }
    }

    #[must_use]
    pub fn horizontal(id: u32) -> Self {
        Self::new(AxisId(id), Orientation::Horizontal)
    }

    #[must_use]
    pub fn vertical(id: u32) -> Self {
        Self::new(AxisId(id), Orientation::Vertical)
    }

    #[must_use]
    pub fn with_range(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    #[must_use]
    pub fn with_pixel_length(mut self, pixel_length: i32) -> Self {
        self.pixel_length = pixel_length;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Sets the initial inversion; the configured bounds are swapped when
    /// their ordering disagrees with it.
    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_auto_scale(mut self, auto_scale: bool) -> Self {
        self.auto_scale = auto_scale;
        self
    }

    #[must_use]
    pub fn with_auto_scale_threshold(mut self, threshold: f64) -> Self {
        self.auto_scale_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_autoscale_variant(mut self, variant: AutoscaleVariant) -> Self {
        self.autoscale_variant = variant;
        self
    }

    /// Builds the range controller described by this config.
    ///
    /// The initial commit does not queue range-change notifications.
    pub fn build(self) -> AxisResult<AxisRangeController> {
        let config = validate_axis_config(self)?;
        let mut axis = AxisRangeController::new(config.orientation);
        axis.set_pixel_length(config.pixel_length)?;
        axis.set_margin(config.margin)?;
        axis.set_auto_scale_threshold(config.auto_scale_threshold)?;
        axis.set_autoscale_variant(config.autoscale_variant);
        axis.set_auto_scale(config.auto_scale);
        axis.set_log_scale(config.log_scale);
        axis.set_range(config.lower, config.upper)?;
        axis.set_inverted(config.inverted);
        axis.drain_range_changes();
        Ok(axis)
    }
}

fn default_pixel_length() -> i32 {
    100
}

fn default_auto_scale_threshold() -> f64 {
    DEFAULT_AUTO_SCALE_THRESHOLD
}
