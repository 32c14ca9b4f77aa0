//! Deterministic simulation-owned RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every simulation instance owns exactly one `SimRng`, seeded from
//! [`DeskConfig::seed`][crate::DeskConfig::seed].  All randomness (arrival
//! count, arrival offsets, service durations) is drawn from it in one
//! sequential stream, so the same seed and configuration always reproduce
//! the same timeline.  There is no global RNG.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::dist;

/// Simulation-level RNG.
///
/// Not shared between simulations; two instances built from the same seed
/// evolve identically and independently.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform whole seconds in `[0, span)`; 0 when `span` is 0.
    #[inline]
    pub fn offset_below(&mut self, span: u64) -> u64 {
        if span == 0 { 0 } else { self.0.gen_range(0..span) }
    }

    /// See [`dist::poisson`].
    #[inline]
    pub fn poisson(&mut self, mean: f64) -> u32 {
        dist::poisson(&mut self.0, mean)
    }

    /// See [`dist::negative_exponential`].
    #[inline]
    pub fn negative_exponential(&mut self, mean: f64) -> f64 {
        dist::negative_exponential(&mut self.0, mean)
    }
}
