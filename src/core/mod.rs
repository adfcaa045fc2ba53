pub mod autoscale;
pub mod axis_range;
pub mod data_range;
pub mod log_scale;
pub mod range;
pub mod types;

use indexmap::IndexMap;

pub use autoscale::{AutoscaleDecision, AutoscaleEngine, AutoscaleVariant};
pub use axis_range::{AxisRangeController, DEFAULT_AUTO_SCALE_THRESHOLD};
pub use data_range::DataRangeAccumulator;
pub use range::{Range, RangeChange};
pub use types::{AxisId, Orientation, PixelPoint};

/// Axes of one plot in insertion order.
pub type AxisMap = IndexMap<AxisId, AxisRangeController>;
