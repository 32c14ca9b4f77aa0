//! The `Simulation` struct and its step loop.

use log::{debug, error, trace};

use rd_core::{CoreError, DeskConfig, PatronId, SimRng, SimTime, WindowId};
use rd_queue::{EventQueue, Iter, Timed};

use crate::window::shortest_line;
use crate::{
    DeskSnapshot, DurationStats, Event, NoopObserver, Patron, PatronStore, SimBuilder, SimError,
    SimObserver, SimResult, WindowLine,
};

/// Minimum transaction length: every service lasts at least this long.
pub const SERVICE_FLOOR_SECS: u64 = 90;

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What a single [`Simulation::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An arrival was routed into `window`'s line.
    Arrived {
        time:   SimTime,
        patron: PatronId,
        window: WindowId,
    },
    /// The head of `window`'s line departed.
    Departed {
        time:   SimTime,
        patron: PatronId,
        window: WindowId,
    },
    /// Nothing left to process; the simulation is complete.
    Idle,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The registration-desk engine.
///
/// Owns the single time-ordered event queue, one [`WindowLine`] per window,
/// the patron arena and the running aggregates.  Each step consumes exactly
/// one event:
///
/// 1. **Arrival**: join the shortest line (lowest index on ties).  A patron
///    who lands in an empty line starts service at once and gets its
///    departure scheduled.
/// 2. **Departure**: the head of the matching line leaves.  If someone is
///    behind it, that patron starts service and gets its departure scheduled.
///
/// The run is complete once a step finds the queue empty; further steps are
/// no-ops.
///
/// Create via [`SimBuilder`] or [`Simulation::configure`].
pub struct Simulation {
    pub(crate) config: DeskConfig,

    /// The only randomness source for this run (seeded from `config.seed`).
    pub(crate) rng: SimRng,

    pub(crate) events: EventQueue<Event>,
    pub(crate) patrons: PatronStore,
    pub(crate) lines: Vec<WindowLine>,

    /// Drawn service durations, recorded when each departure is scheduled.
    pub(crate) service: DurationStats,
    /// Arrival-to-service-start delays, recorded alongside `service`.
    pub(crate) wait: DurationStats,
    pub(crate) max_line_length: usize,

    pub(crate) arrivals_processed: u64,
    pub(crate) departures_processed: u64,

    pub(crate) now: SimTime,
    pub(crate) complete: bool,
}

impl Simulation {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a simulation from the four front-end scalars.  The patron count
    /// is Poisson-perturbed around `expected_patrons`.
    pub fn configure(
        expected_patrons: u32,
        window_count: u16,
        open_duration_secs: u64,
        expected_service_secs: u64,
    ) -> SimResult<Self> {
        SimBuilder::new(DeskConfig::new(
            expected_patrons,
            window_count,
            open_duration_secs,
            expected_service_secs,
        ))
        .build()
    }

    /// Build a simulation from a full configuration.
    pub fn new(config: DeskConfig) -> SimResult<Self> {
        SimBuilder::new(config).build()
    }

    /// Seed the timeline with one arrival per entry of `arrivals`.
    pub(crate) fn from_parts(config: DeskConfig, rng: SimRng, arrivals: Vec<SimTime>) -> Self {
        let mut events = EventQueue::with_capacity(arrivals.len() + config.window_count as usize);
        let mut patrons = PatronStore::with_capacity(arrivals.len());
        for time in arrivals {
            let patron = patrons.create(time);
            events.enqueue(Event::Arrival { time, patron });
        }

        let lines = vec![WindowLine::new(); config.window_count as usize];
        let complete = events.is_empty();

        debug!(
            "desk configured: {} patrons, {} windows, open {} for {}s, service mean {}s",
            patrons.len(),
            lines.len(),
            config.open_time,
            config.open_duration_secs,
            config.expected_service_secs,
        );

        Self {
            now: config.open_time,
            config,
            rng,
            events,
            patrons,
            lines,
            service: DurationStats::new(),
            wait: DurationStats::new(),
            max_line_length: 0,
            arrivals_processed: 0,
            departures_processed: 0,
            complete,
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance by exactly one event.  No-op once complete.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        self.step_with(&mut NoopObserver)
    }

    /// Advance by exactly one event, reporting to `observer`.
    ///
    /// Returns [`SimError::InvariantViolation`] if a departure's patron is
    /// not at the head of any line; the run is aborted (queue cleared,
    /// marked complete) before the error is returned.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepOutcome> {
        if self.complete {
            return Ok(StepOutcome::Idle);
        }
        if self.events.is_empty() {
            self.complete = true;
            debug!(
                "desk complete at {}: {} arrivals, {} departures processed",
                self.now, self.arrivals_processed, self.departures_processed,
            );
            observer.on_complete(self.now);
            return Ok(StepOutcome::Idle);
        }

        let event = self.events.dequeue()?;
        self.now = event.time();

        match event {
            Event::Arrival { time, patron } => self.handle_arrival(time, patron, observer),
            Event::Departure { time, patron, service_secs } => {
                self.handle_departure(time, patron, service_secs, observer).inspect_err(|e| {
                    error!("aborting desk simulation: {e}");
                    self.abort();
                })
            }
        }
    }

    /// Step until complete and return the final snapshot.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<DeskSnapshot> {
        while !self.complete {
            self.step_with(observer)?;
        }
        Ok(self.snapshot())
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn handle_arrival<O: SimObserver>(
        &mut self,
        time: SimTime,
        patron: PatronId,
        observer: &mut O,
    ) -> SimResult<StepOutcome> {
        let window = shortest_line(&self.lines).ok_or_else(|| {
            SimError::Config(CoreError::Config("no service windows".into()))
        })?;

        let line_len = self.lines[window.index()].join(patron);
        self.max_line_length = self.max_line_length.max(line_len);
        self.arrivals_processed += 1;

        trace!("{time} arrival {patron} -> {window} (line {line_len})");
        observer.on_arrival(time, patron, window, line_len);

        // Sole occupant: service starts immediately.
        if line_len == 1 {
            self.schedule_departure(patron, window, time, observer);
        }

        Ok(StepOutcome::Arrived { time, patron, window })
    }

    fn handle_departure<O: SimObserver>(
        &mut self,
        time: SimTime,
        patron: PatronId,
        service_secs: u64,
        observer: &mut O,
    ) -> SimResult<StepOutcome> {
        let index = self
            .lines
            .iter()
            .position(|line| line.head() == Some(patron))
            .ok_or(SimError::InvariantViolation { patron, time })?;
        let window = WindowId(index as u16);

        let line = &mut self.lines[index];
        line.pop_head();
        let next = line.head();
        self.departures_processed += 1;

        trace!("{time} departure {patron} <- {window} after {service_secs}s");
        observer.on_departure(time, patron, window, service_secs);

        if let Some(next) = next {
            self.schedule_departure(next, window, time, observer);
        }

        Ok(StepOutcome::Departed { time, patron, window })
    }

    /// Draw a service duration for `patron` starting at `start`, enqueue its
    /// departure and fold the duration into the aggregates.
    fn schedule_departure<O: SimObserver>(
        &mut self,
        patron: PatronId,
        window: WindowId,
        start: SimTime,
        observer: &mut O,
    ) {
        let mean = self.config.expected_service_secs.saturating_sub(SERVICE_FLOOR_SECS);
        // Truncation to whole seconds keeps the floor exact; the cast and the
        // add both saturate for absurd means.
        let drawn = self.rng.negative_exponential(mean as f64) as u64;
        let service_secs = SERVICE_FLOOR_SECS.saturating_add(drawn);
        let time = start + service_secs;

        let wait_secs = self
            .patrons
            .set_departure(patron, time)
            .map_or(0, |p| start.since(p.arrival));

        self.events.enqueue(Event::Departure { time, patron, service_secs });
        self.service.record(service_secs);
        self.wait.record(wait_secs);

        trace!("{start} service {patron} @ {window}: {service_secs}s, waited {wait_secs}s");
        observer.on_service_start(start, patron, window, service_secs, wait_secs);
    }

    fn abort(&mut self) {
        self.events.clear();
        self.complete = true;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Timestamp of the most recently processed event (`open_time` before
    /// the first step).
    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Window lines in index order.
    pub fn windows(&self) -> &[WindowLine] {
        &self.lines
    }

    pub fn patron(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(id)
    }

    /// Number of patrons generated for this run (the Poisson-sampled count).
    pub fn patron_count(&self) -> usize {
        self.patrons.len()
    }

    /// Events still on the timeline, in processing order.
    pub fn pending_events(&self) -> Iter<'_, Event> {
        self.events.iter()
    }

    pub fn service_stats(&self) -> &DurationStats {
        &self.service
    }

    pub fn wait_stats(&self) -> &DurationStats {
        &self.wait
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Departures scheduled so far (the service-duration sample count).
    pub fn departures(&self) -> u64 {
        self.service.count()
    }

    pub fn arrivals_processed(&self) -> u64 {
        self.arrivals_processed
    }

    pub fn departures_processed(&self) -> u64 {
        self.departures_processed
    }

    /// Copy out everything a renderer needs.
    pub fn snapshot(&self) -> DeskSnapshot {
        DeskSnapshot {
            now:             self.now,
            complete:        self.complete,
            windows:         self.lines.iter().map(|l| l.iter().collect()).collect(),
            service:         self.service.summary(),
            wait:            self.wait.summary(),
            max_line_length: self.max_line_length,
            departures:      self.service.count(),
            pending_events:  self.events.len(),
        }
    }
}
