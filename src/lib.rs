//! axis-rs: toolkit-independent axis range engine for XY charts.
//!
//! The crate owns the numeric side of chart axes: value/pixel transforms,
//! zoom, pan, autoscale and the pointer gesture state machines that drive
//! them. Drawing, tick layout and event-loop integration stay with the host,
//! which feeds pointer input and data ranges in and listens for
//! [`extensions::PlotEvent`]s.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{AxisConfig, XyPlot, XyPlotConfig};
pub use error::{AxisError, AxisResult};
