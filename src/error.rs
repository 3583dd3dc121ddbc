use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RingQueueError {
    #[error("queue is full and cannot be inserted into")]
    QueueFullInsertionError(i64),

    #[error("queue is empty and no element can be removed")]
    QueueEmptyError,
}
