//! UseCase error types.

use thiserror::Error;

/// Failure to publish an event to the broadcaster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("broadcast failed: {0}")]
    Broadcast(String),
}
