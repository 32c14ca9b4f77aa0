//! Fluent builder for constructing a [`Simulation`].

use rd_core::{DeskConfig, SimRng, SimTime};

use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`DeskConfig`] — expected patrons, windows, open span, service mean, …
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                     |
/// |---------------------------|---------------------------------------------|
/// | `.seed(s)`                | `config.seed`                               |
/// | `.open_time(t)`           | `config.open_time` (06:00:00)               |
/// | `.exact_patron_count()`   | Poisson-sampled count around the mean       |
/// | `.arrivals(v)`            | Uniform draws over the open span            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(DeskConfig::from_hours(1_000, 5, 10, 270))
///     .seed(7)
///     .build()?;
/// let snapshot = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      DeskConfig,
    exact_count: bool,
    arrivals:    Option<Vec<SimTime>>,
}

impl SimBuilder {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            config,
            exact_count: false,
            arrivals:    None,
        }
    }

    /// Override the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the logical opening time.
    pub fn open_time(mut self, open_time: SimTime) -> Self {
        self.config.open_time = open_time;
        self
    }

    /// Use `expected_patrons` as the exact patron count instead of drawing
    /// it from a Poisson distribution.
    pub fn exact_patron_count(mut self) -> Self {
        self.exact_count = true;
        self
    }

    /// Supply explicit arrival timestamps, one patron each, in patron-id
    /// order.  Overrides both the count draw and the arrival-offset draws.
    pub fn arrivals(mut self, arrivals: Vec<SimTime>) -> Self {
        self.arrivals = Some(arrivals);
        self
    }

    /// Validate the configuration, generate every arrival, and return a
    /// ready-to-step [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);

        // ── Arrival timestamps ────────────────────────────────────────────
        let arrivals = match self.arrivals {
            Some(a) => a,
            None => {
                let count = if self.exact_count {
                    self.config.expected_patrons
                } else {
                    rng.poisson(f64::from(self.config.expected_patrons))
                };
                let open = self.config.open_time;
                let span = self.config.open_duration_secs;
                (0..count).map(|_| open + rng.offset_below(span)).collect()
            }
        };

        Ok(Simulation::from_parts(self.config, rng, arrivals))
    }
}
