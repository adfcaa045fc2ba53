mod autoscale_controller;
mod axis_config;
mod axis_controller;
mod gesture_controller;
mod history;
mod observer_dispatch;
mod plot;
mod plot_config;
mod validation;

pub use axis_config::AxisConfig;
pub use history::{DEFAULT_HISTORY_LIMIT, ZoomCommand, ZoomHistory};
pub use plot::XyPlot;
pub use plot_config::XyPlotConfig;
