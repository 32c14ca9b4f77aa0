//! Simulation observer trait for progress reporting and data collection.

use rd_core::{PatronId, SimTime, WindowId};

/// Callbacks invoked by [`Simulation::step_with`][crate::Simulation::step_with]
/// and [`Simulation::run`][crate::Simulation::run] as events are processed.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — line-length tracker
///
/// ```rust,ignore
/// struct Peak(usize);
///
/// impl SimObserver for Peak {
///     fn on_arrival(&mut self, _t: SimTime, _p: PatronId, _w: WindowId, len: usize) {
///         self.0 = self.0.max(len);
///     }
/// }
/// ```
pub trait SimObserver {
    /// A patron joined `window`'s line, which is now `line_len` long.
    fn on_arrival(
        &mut self,
        _time:     SimTime,
        _patron:   PatronId,
        _window:   WindowId,
        _line_len: usize,
    ) {}

    /// A patron reached the window and its departure was scheduled.
    ///
    /// `wait_secs` is the time it spent in line before `time`.
    fn on_service_start(
        &mut self,
        _time:         SimTime,
        _patron:       PatronId,
        _window:       WindowId,
        _service_secs: u64,
        _wait_secs:    u64,
    ) {}

    /// A patron finished a `service_secs`-long service and left `window`.
    fn on_departure(
        &mut self,
        _time:         SimTime,
        _patron:       PatronId,
        _window:       WindowId,
        _service_secs: u64,
    ) {}

    /// Called once, when a step finds the timeline empty.
    fn on_complete(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to step but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
