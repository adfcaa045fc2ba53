use indexmap::IndexSet;

use crate::error::{AxisError, AxisResult};

use super::{AxisConfig, XyPlotConfig};

pub(super) fn validate_axis_config(config: AxisConfig) -> AxisResult<AxisConfig> {
    if !config.lower.is_finite() || !config.upper.is_finite() {
        return Err(AxisError::InvalidRange {
            lower: config.lower,
            upper: config.upper,
        });
    }
    if config.pixel_length <= 0 {
        return Err(AxisError::InvalidData(format!(
            "{} pixel_length must be > 0",
            config.id
        )));
    }
    if config.margin < 0 {
        return Err(AxisError::InvalidData(format!(
            "{} margin must be >= 0",
            config.id
        )));
    }
    if !(0.0..=1.0).contains(&config.auto_scale_threshold) {
        return Err(AxisError::InvalidThreshold(config.auto_scale_threshold));
    }
    Ok(config)
}

pub(super) fn validate_plot_config(config: &XyPlotConfig) -> AxisResult<()> {
    if !config.zoom_ratio.is_finite() || config.zoom_ratio <= 0.0 || config.zoom_ratio >= 1.0 {
        return Err(AxisError::InvalidData(
            "zoom_ratio must be finite and in (0, 1)".to_owned(),
        ));
    }
    if config.zoom_repeat_interval_ms == 0 {
        return Err(AxisError::InvalidData(
            "zoom_repeat_interval_ms must be > 0".to_owned(),
        ));
    }
    if config.dynamic_zoom_threshold_px < 0 {
        return Err(AxisError::InvalidData(
            "dynamic_zoom_threshold_px must be >= 0".to_owned(),
        ));
    }

    let mut seen = IndexSet::with_capacity(config.axes.len());
    for axis in &config.axes {
        if !seen.insert(axis.id) {
            return Err(AxisError::InvalidData(format!(
                "axis id `{}` is configured more than once",
                axis.id
            )));
        }
        validate_axis_config(*axis)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_axis_config, validate_plot_config};
    use crate::api::{AxisConfig, XyPlotConfig};
    use crate::error::AxisError;

    #[test]
    fn axis_config_rejects_non_finite_bounds() {
        let err = validate_axis_config(AxisConfig::horizontal(0).with_range(f64::NAN, 1.0))
            .expect_err("NaN bound must fail");
        assert!(matches!(err, AxisError::InvalidRange { .. }));
    }

    #[test]
    fn axis_config_rejects_zero_pixel_length() {
        let err = validate_axis_config(AxisConfig::vertical(3).with_pixel_length(0))
            .expect_err("zero length must fail");
        assert!(format!("{err}").contains("axis#3 pixel_length"));
    }

    #[test]
    fn axis_config_rejects_threshold_above_one() {
        let err = validate_axis_config(AxisConfig::horizontal(0).with_auto_scale_threshold(1.5))
            .expect_err("threshold must fail");
        assert_eq!(err, AxisError::InvalidThreshold(1.5));
    }

    #[test]
    fn plot_config_rejects_duplicate_axis_ids() {
        let config = XyPlotConfig::new()
            .with_axis(AxisConfig::horizontal(7))
            .with_axis(AxisConfig::vertical(7));
        let err = validate_plot_config(&config).expect_err("duplicate ids must fail");
        assert!(format!("{err}").contains("more than once"));
    }

    #[test]
    fn plot_config_rejects_zoom_ratio_out_of_range() {
        let config = XyPlotConfig::new().with_zoom_ratio(1.0);
        let err = validate_plot_config(&config).expect_err("ratio 1 must fail");
        assert!(format!("{err}").contains("zoom_ratio"));
    }

    #[test]
    fn default_plot_config_is_valid() {
        validate_plot_config(&XyPlotConfig::new().with_primary_axes(400, 300))
            .expect("default config should be valid");
    }
}
