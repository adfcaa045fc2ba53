use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::gesture::GestureScope;

/// Default delay between press-and-hold zoom steps.
pub const DEFAULT_ZOOM_REPEAT_INTERVAL: Duration = Duration::from_millis(200);

/// A zoom step the host must run on its own event loop after `delay`.
///
/// The host hands the value back to the plot when its timer fires; stale
/// values (from a gesture that already ended) are ignored, which is all the
/// cancellation there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledZoom {
    pub scope: GestureScope,
    pub delay: Duration,
    pub(crate) generation: u64,
}

impl ScheduledZoom {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Cooperative repeat schedule for press-and-hold zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRepeatSchedule {
    interval: Duration,
    generation: u64,
    active: bool,
}

impl Default for ZoomRepeatSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_REPEAT_INTERVAL)
    }
}

impl ZoomRepeatSchedule {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            active: false,
        }
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Starts a new repetition series, invalidating any earlier one.
    pub fn start(&mut self, scope: GestureScope) -> ScheduledZoom {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        ScheduledZoom {
            scope,
            delay: self.interval,
            generation: self.generation,
        }
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Whether `scheduled` belongs to the running series.
    #[must_use]
    pub fn accepts(self, scheduled: ScheduledZoom) -> bool {
        self.active && scheduled.generation == self.generation
    }

    /// Next repost of an accepted step.
    #[must_use]
    pub fn repost(self, scheduled: ScheduledZoom) -> ScheduledZoom {
        ScheduledZoom {
            delay: self.interval,
            ..scheduled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomRepeatSchedule;
    use crate::interaction::GestureScope;

    #[test]
    fn restarted_schedule_rejects_stale_steps() {
        let mut schedule = ZoomRepeatSchedule::default();
        let first = schedule.start(GestureScope::Plot);
        schedule.cancel();
        let second = schedule.start(GestureScope::Plot);
        assert!(!schedule.accepts(first));
        assert!(schedule.accepts(second));
        schedule.cancel();
        assert!(!schedule.accepts(second));
    }
}
