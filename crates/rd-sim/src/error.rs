use rd_core::{CoreError, PatronId, SimTime};
use rd_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    /// Arrival/departure bookkeeping has desynchronized.  The run is aborted
    /// when this is raised.
    #[error("departure of {patron} at {time} does not match the head of any window line")]
    InvariantViolation {
        patron: PatronId,
        time:   SimTime,
    },

    #[error("event queue error: {0}")]
    Queue(#[from] QueueError),
}

pub type SimResult<T> = Result<T, SimError>;
