//! Timeline events.

use rd_core::{PatronId, SimTime};
use rd_queue::Timed;

/// One entry on the simulated timeline.
///
/// Events refer to their patron by id only; the patron record lives in the
/// engine's [`PatronStore`][crate::PatronStore].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A patron walks up to the desk and joins a line.
    Arrival {
        time:   SimTime,
        patron: PatronId,
    },
    /// A patron finishes service and leaves the head of its line.
    Departure {
        time:         SimTime,
        patron:       PatronId,
        /// Drawn service duration that produced this departure.
        service_secs: u64,
    },
}

impl Event {
    #[inline]
    pub fn patron(&self) -> PatronId {
        match *self {
            Event::Arrival { patron, .. } | Event::Departure { patron, .. } => patron,
        }
    }

    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self, Event::Arrival { .. })
    }
}

impl Timed for Event {
    #[inline]
    fn time(&self) -> SimTime {
        match *self {
            Event::Arrival { time, .. } | Event::Departure { time, .. } => time,
        }
    }
}
