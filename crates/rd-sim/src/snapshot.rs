//! Read-only view of the desk handed to renderers.

use rd_core::{PatronId, SimTime};

use crate::DurationSummary;

/// Everything a front end needs to draw one frame of the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeskSnapshot {
    /// Timestamp of the most recently processed event.
    pub now: SimTime,
    pub complete: bool,
    /// Per-window line contents, head (patron being served) first.
    pub windows: Vec<Vec<PatronId>>,
    /// Drawn service durations.
    pub service: DurationSummary,
    /// Time from arrival to start of service.
    pub wait: DurationSummary,
    pub max_line_length: usize,
    /// Departures scheduled so far (counted when service starts).
    pub departures: u64,
    /// Events still waiting on the timeline.
    pub pending_events: usize,
}

impl DeskSnapshot {
    /// Length of the longest line right now.
    pub fn longest_current_line(&self) -> usize {
        self.windows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
