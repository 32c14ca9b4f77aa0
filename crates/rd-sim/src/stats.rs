//! Running duration aggregates.

/// Shortest / longest / total / count over a stream of durations (seconds).
///
/// Starts at the identity: shortest = `u64::MAX` sentinel, everything else 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationStats {
    shortest: u64,
    longest:  u64,
    total:    u64,
    count:    u64,
}

impl Default for DurationStats {
    fn default() -> Self {
        Self { shortest: u64::MAX, longest: 0, total: 0, count: 0 }
    }
}

impl DurationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, secs: u64) {
        self.total = self.total.saturating_add(secs);
        self.count += 1;
        self.shortest = self.shortest.min(secs);
        self.longest = self.longest.max(secs);
    }

    /// `None` until at least one duration is recorded.
    pub fn shortest(&self) -> Option<u64> {
        (self.count > 0).then_some(self.shortest)
    }

    pub fn longest(&self) -> Option<u64> {
        (self.count > 0).then_some(self.longest)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean duration, or `None` ("no data yet") when nothing is recorded.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total as f64 / self.count as f64)
    }

    pub fn summary(&self) -> DurationSummary {
        DurationSummary {
            shortest: self.shortest(),
            longest:  self.longest(),
            average:  self.average(),
            count:    self.count,
        }
    }
}

/// Plain-data view of a [`DurationStats`] for snapshots.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationSummary {
    pub shortest: Option<u64>,
    pub longest:  Option<u64>,
    pub average:  Option<f64>,
    pub count:    u64,
}
