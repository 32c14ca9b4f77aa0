//! `rd-core` — foundational types for the `regdesk` registration-desk
//! simulator.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `PatronId`, `WindowId`                                    |
//! | [`time`]    | `SimTime` (logical seconds), `DEFAULT_OPEN_TIME`          |
//! | [`config`]  | `DeskConfig`                                              |
//! | [`dist`]    | `poisson`, `negative_exponential`, `unit_open`            |
//! | [`rng`]     | `SimRng` (simulation-owned uniform source)                |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod dist;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DeskConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{PatronId, WindowId};
pub use rng::SimRng;
pub use time::{DEFAULT_OPEN_TIME, SimTime};
