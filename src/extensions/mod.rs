//! Observer hooks for hosts that redraw or sync state on plot changes.

mod observers;

pub use observers::{PlotContext, PlotEvent, PlotObserver};
