use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::core::{AxisId, AxisMap, AxisRangeController, Range};
use crate::error::{AxisError, AxisResult};
use crate::extensions::PlotObserver;
use crate::interaction::{AxisGestureCoordinator, GestureSettings, PlotGestureCoordinator};

use super::history::ZoomHistory;
use super::validation::validate_plot_config;
use super::{AxisConfig, XyPlotConfig};

/// Main orchestration facade consumed by host applications.
///
/// `XyPlot` owns the axes of one plot, the plot-wide and per-axis gesture
/// coordinators, the last known data range of each axis and the undo
/// history. Data that arrives while a gesture is armed is autoscaled once
/// the gesture ends. Hosts feed it pointer input and data ranges; observers receive
/// the resulting notifications.
pub struct XyPlot {
    pub(super) axes: AxisMap,
    pub(super) plot_gesture: PlotGestureCoordinator,
    pub(super) axis_gestures: IndexMap<AxisId, AxisGestureCoordinator>,
    pub(super) data_ranges: IndexMap<AxisId, Range>,
    pub(super) deferred_autoscale: IndexSet<AxisId>,
    pub(super) history: ZoomHistory,
    pub(super) observers: Vec<Box<dyn PlotObserver>>,
    pub(super) settings: GestureSettings,
}

impl XyPlot {
    /// Builds a plot from a validated config.
    pub fn new(config: XyPlotConfig) -> AxisResult<Self> {
        validate_plot_config(&config)?;
        let settings = config.gesture_settings();

        let mut plot = Self {
            axes: AxisMap::with_capacity(config.axes.len()),
            plot_gesture: PlotGestureCoordinator::new(settings),
            axis_gestures: IndexMap::with_capacity(config.axes.len()),
            data_ranges: IndexMap::new(),
            deferred_autoscale: IndexSet::new(),
            history: ZoomHistory::new(config.history_limit),
            observers: Vec::new(),
            settings,
        };
        for axis in config.axes {
            plot.add_axis(axis)?;
        }
        plot.set_gesture_type(config.gesture_type);
        debug!(axes = plot.axes.len(), gesture = ?config.gesture_type, "plot created");
        Ok(plot)
    }

    /// Adds an axis. Fails when the id is already in use.
    pub fn add_axis(&mut self, config: AxisConfig) -> AxisResult<()> {
        if self.axes.contains_key(&config.id) {
            return Err(AxisError::InvalidData(format!(
                "axis id `{}` is already registered",
                config.id
            )));
        }
        let axis = config.build()?;
        let mut coordinator = AxisGestureCoordinator::new(config.id, self.settings);
        coordinator.set_gesture_type(self.plot_gesture.gesture_type(), axis.orientation());
        self.axes.insert(config.id, axis);
        self.axis_gestures.insert(config.id, coordinator);
        Ok(())
    }

    /// Removes an axis. Returns `true` when removed.
    pub fn remove_axis(&mut self, id: AxisId) -> bool {
        self.axis_gestures.shift_remove(&id);
        self.data_ranges.shift_remove(&id);
        self.deferred_autoscale.shift_remove(&id);
        self.axes.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn axes(&self) -> &AxisMap {
        &self.axes
    }

    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&AxisRangeController> {
        self.axes.get(&id)
    }

    pub fn axis_ids(&self) -> impl Iterator<Item = AxisId> + '_ {
        self.axes.keys().copied()
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn range(&self, id: AxisId) -> Option<Range> {
        self.axes.get(&id).map(AxisRangeController::range)
    }

    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        self.settings
    }

    pub(super) fn axis_mut(&mut self, id: AxisId) -> AxisResult<&mut AxisRangeController> {
        self.axes
            .get_mut(&id)
            .ok_or_else(|| AxisError::InvalidData(format!("unknown axis `{id}`")))
    }

    pub(super) fn axis_ref(&self, id: AxisId) -> AxisResult<&AxisRangeController> {
        self.axes
            .get(&id)
            .ok_or_else(|| AxisError::InvalidData(format!("unknown axis `{id}`")))
    }
}
