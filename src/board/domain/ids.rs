//! Identifier and validated scalar types for the board domain.

use super::ValidationError;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Identifiers are millisecond timestamps taken at creation time, bumped
/// past any value already issued so that two tasks created within the same
/// millisecond still receive distinct ids. They are immutable for the
/// lifetime of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues unique, strictly increasing task identifiers derived from the
/// injected clock.
///
/// The generator must observe every identifier already present in the
/// collection before issuing a new one; `next_id` then returns the current
/// clock reading or the successor of the largest observed value, whichever
/// is greater.
#[derive(Debug)]
pub struct TaskIdGenerator<C: Clock> {
    clock: C,
    last: i64,
}

impl<C: Clock> TaskIdGenerator<C> {
    /// Creates a generator that has issued nothing yet.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock, last: 0 }
    }

    /// Records an identifier that already exists in the collection.
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id.value());
    }

    /// Issues the next unique identifier.
    pub fn next_id(&mut self) -> TaskId {
        let now = self.clock.utc().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        TaskId::new(self.last)
    }
}

/// Validated board name.
///
/// Board names must be non-empty after trimming. The empty name is the
/// absent-board sentinel: it is never constructible through [`Self::new`]
/// and only arises when deserialising persisted records that carry no
/// board field, in which case the projection drops the record from the
/// board set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardName(String);

impl BoardName {
    /// Creates a validated board name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyBoardName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyBoardName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the board name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoardName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BoardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task title.
///
/// Titles must be non-empty after trimming.
///
/// # Examples
///
///     use kanri::board::domain::TaskTitle;
///
///     let title = TaskTitle::new("Draft the release notes").expect("valid");
///     assert_eq!(title.as_str(), "Draft the release notes");
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
