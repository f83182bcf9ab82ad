//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing domain board values from form input
/// or persisted text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// The status value does not name a declared column.
    #[error("unknown status: {0}")]
    UnknownStatus(String),
}
