//! Task record and status column types.

use super::{BoardName, TaskId, TaskTitle, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status column a task is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Work not started.
    Todo,
    /// Work in progress.
    Doing,
    /// Work finished.
    Done,
}

impl Status {
    /// Declared columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(ValidationError::UnknownStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task record.
///
/// The identifier is immutable after creation; every other field can be
/// replaced through the setters, which the repository drives when merging a
/// patch. Persisted as a flat JSON object with fields
/// `id, title, description, status, board`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default)]
    description: String,
    status: Status,
    #[serde(default)]
    board: BoardName,
}

impl Task {
    /// Creates a task from validated parts.
    #[must_use]
    pub const fn new(
        id: TaskId,
        title: TaskTitle,
        description: String,
        status: Status,
        board: BoardName,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            board,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the free-form description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status column.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the board this task belongs to.
    #[must_use]
    pub const fn board(&self) -> &BoardName {
        &self.board
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Moves the task to another status column.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Reassigns the task to another board.
    pub fn set_board(&mut self, board: BoardName) {
        self.board = board;
    }
}
