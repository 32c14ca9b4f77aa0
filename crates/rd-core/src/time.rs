//! Logical time model.
//!
//! # Design
//!
//! Simulated time is a whole number of seconds since midnight of the
//! simulated day, wrapped in `SimTime`.  It advances only when the engine
//! processes an event; it has no relation to wall-clock execution time.
//!
//! Whole seconds keep every schedule comparison exact, which matters because
//! the event queue's tie-break (FIFO among equal timestamps) is observable.

use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// A point in simulated time, in seconds since midnight of day 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

/// The desk opens at 06:00:00 unless configured otherwise.
pub const DEFAULT_OPEN_TIME: SimTime = SimTime::from_hms(6, 0, 0);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);
    /// Latest representable time; later instants saturate here.
    pub const END: SimTime = SimTime(u64::MAX);

    /// Build a time-of-day on day 0.
    pub const fn from_hms(hours: u64, minutes: u64, seconds: u64) -> SimTime {
        SimTime(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)
    }

    /// Return the time `secs` seconds after `self`, pinned at `SimTime::END`.
    #[inline]
    pub fn offset(self, secs: u64) -> SimTime {
        SimTime(self.0.saturating_add(secs))
    }

    /// Seconds elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Break into (day, hour, minute, second) components.
    pub fn dhms(self) -> (u64, u64, u64, u64) {
        let days = self.0 / SECS_PER_DAY;
        let hours = (self.0 % SECS_PER_DAY) / SECS_PER_HOUR;
        let minutes = (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = self.0 % SECS_PER_MINUTE;
        (days, hours, minutes, seconds)
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.offset(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    /// # Panics
    /// Panics in debug mode if `rhs > self`.
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m, s) = self.dhms();
        write!(f, "{h:02}:{m:02}:{s:02}")?;
        if d > 0 {
            write!(f, " +{d}d")?;
        }
        Ok(())
    }
}

/// Format a span of seconds as `HH:MM:SS` (hours are not wrapped).
pub fn format_secs(secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        secs / SECS_PER_HOUR,
        (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
        secs % SECS_PER_MINUTE,
    )
}
