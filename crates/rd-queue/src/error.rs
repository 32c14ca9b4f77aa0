use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// `peek`/`dequeue` called with nothing queued.
    #[error("cannot {op} an empty event queue")]
    Empty { op: &'static str },
}

pub type QueueResult<T> = Result<T, QueueError>;
