//! `rd-queue` — the time-ordered event queue.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`queue`]  | `EventQueue<T>`, `Timed`, `Iter`                          |
//! | [`error`]  | `QueueError`, `QueueResult<T>`                            |
//!
//! # Ordering model (summary)
//!
//! ```text
//! enqueue(e):  walk from the front past every node with time ≤ e.time,
//!              splice e in before the first strictly-later node
//! peek/dequeue: the front node, O(1)
//! ```
//!
//! The walk makes the sequence ascending by timestamp with FIFO order among
//! equal timestamps.

pub mod error;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{QueueError, QueueResult};
pub use queue::{EventQueue, Iter, Timed};
