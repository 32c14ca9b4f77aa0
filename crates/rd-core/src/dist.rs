//! Distribution generators that drive arrival counts and service durations.
//!
//! Both generators take the caller's uniform source explicitly.  The engine
//! passes its own [`SimRng`][crate::SimRng], so a simulation's whole timeline
//! is reproducible from its seed.

use rand::Rng;

/// A uniform draw from the half-open interval `(0, 1]`.
///
/// `rand` samples `f64` from `[0, 1)`; flipping it keeps `ln` finite.
#[inline]
pub fn unit_open<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    1.0 - rng.r#gen::<f64>()
}

/// Poisson-distributed count with the given `mean`.
///
/// Product-of-uniforms method in log space: keep adding `ln(u)` for fresh
/// uniforms `u` until the running sum drops to `-mean` or below; the sample
/// is the number of draws minus one.  A non-positive `mean` yields 0.
///
/// Cost is O(mean) draws.
pub fn poisson<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> u32 {
    let limit = -mean;
    let mut sum = unit_open(rng).ln();
    let mut count = 0u32;
    while sum > limit {
        sum += unit_open(rng).ln();
        count += 1;
    }
    count
}

/// Negative-exponential sample with the given `mean`: `-mean * ln(u)`.
///
/// Always finite and non-negative for a non-negative `mean`.
#[inline]
pub fn negative_exponential<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> f64 {
    -mean * unit_open(rng).ln()
}
