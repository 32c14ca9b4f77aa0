//! Run configuration for one registration-desk simulation.

use crate::{CoreError, CoreResult, DEFAULT_OPEN_TIME, SimTime};

const SECS_PER_HOUR: u64 = 3_600;

/// Top-level simulation configuration.
///
/// The four scalars a front end collects are `expected_patrons`,
/// `window_count`, `open_duration_secs` and `expected_service_secs`; the
/// rest have sensible defaults.  Typically loaded from JSON by the
/// application (with the `serde` feature) and handed to the simulation
/// builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeskConfig {
    /// Mean of the Poisson draw that decides how many patrons show up.
    pub expected_patrons: u32,

    /// Number of service windows, each with its own line.  Must be ≥ 1.
    pub window_count: u16,

    /// How long registration stays open.  Arrivals are spread uniformly
    /// over `[open_time, open_time + open_duration_secs)`.
    pub open_duration_secs: u64,

    /// Expected mean service duration.  Values below the 90 s transaction
    /// floor behave as if they were exactly 90 s.
    pub expected_service_secs: u64,

    /// Logical timestamp at which the desk opens.  Default: 06:00:00.
    pub open_time: SimTime,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for DeskConfig {
    /// 1000 expected patrons, 5 windows, 10 hours open, 4m30s service.
    fn default() -> Self {
        Self {
            expected_patrons: 1_000,
            window_count: 5,
            open_duration_secs: 10 * SECS_PER_HOUR,
            expected_service_secs: 270,
            open_time: DEFAULT_OPEN_TIME,
            seed: 42,
        }
    }
}

impl DeskConfig {
    /// Configuration from the four front-end scalars; other fields default.
    pub fn new(
        expected_patrons: u32,
        window_count: u16,
        open_duration_secs: u64,
        expected_service_secs: u64,
    ) -> Self {
        Self {
            expected_patrons,
            window_count,
            open_duration_secs,
            expected_service_secs,
            ..Self::default()
        }
    }

    /// Like [`new`](Self::new) but with the opening span given in hours.
    pub fn from_hours(
        expected_patrons: u32,
        window_count: u16,
        hours_open: u64,
        expected_service_secs: u64,
    ) -> Self {
        Self::new(
            expected_patrons,
            window_count,
            hours_open * SECS_PER_HOUR,
            expected_service_secs,
        )
    }

    /// The logical time at which the last arrival may still be drawn
    /// (exclusive upper bound).
    #[inline]
    pub fn close_time(&self) -> SimTime {
        self.open_time + self.open_duration_secs
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.window_count == 0 {
            return Err(CoreError::Config(
                "at least one service window is required".into(),
            ));
        }
        Ok(())
    }
}
