//! Errors from the progress services.

use weightwise_core::GoalValidationError;
use weightwise_storage::StorageError;

/// Error type for progress services.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors raised by the tracker and the goal editor.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Storage failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The goal draft was rejected
    #[error("invalid goal: {0}")]
    InvalidGoal(#[from] GoalValidationError),
}
