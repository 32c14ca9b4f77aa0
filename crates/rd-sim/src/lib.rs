//! `rd-sim` — discrete-event engine for the `regdesk` registration desk.
//!
//! # Step loop
//!
//! ```text
//! build:   draw N ~ Poisson(expected_patrons)
//!          N × { offset ~ U[0, open_span); enqueue Arrival(open + offset) }
//! step:    queue empty?  → complete (terminal; later steps are no-ops)
//!          pop earliest event:
//!            Arrival(p)   → join shortest line (lowest index on ties)
//!                           line was empty → schedule Departure(p)
//!            Departure(p) → p leaves the head of its line
//!                           line non-empty → schedule Departure(new head)
//! schedule Departure(p, start):
//!          service = 90 + NegExp(max(mean − 90, 0))  (whole seconds)
//!          enqueue Departure at start + service; fold into aggregates
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `DeskSnapshot`.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rd_core::DeskConfig;
//! use rd_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(DeskConfig::default()).seed(7).build()?;
//! while !sim.is_complete() {
//!     sim.step()?;
//!     render(&sim.snapshot());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod patron;
pub mod sim;
pub mod snapshot;
pub mod stats;
pub mod window;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::Event;
pub use observer::{NoopObserver, SimObserver};
pub use patron::{Patron, PatronStore};
pub use sim::{SERVICE_FLOOR_SECS, Simulation, StepOutcome};
pub use snapshot::DeskSnapshot;
pub use stats::{DurationStats, DurationSummary};
pub use window::{WindowLine, shortest_line};
