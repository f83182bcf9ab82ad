//! Shared fixtures and test doubles for the board unit tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

use crate::board::domain::{BoardName, Status, Task, TaskId, TaskTitle};
use crate::board::ports::{KeyValueStore, StoreResult, StoreUnavailable};

/// Clock frozen at a fixed instant, for deterministic identifier tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).expect("valid millisecond timestamp"))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Store whose every operation fails, for degradation tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn load(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreUnavailable::new(std::io::Error::other("store offline")))
    }

    fn save(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreUnavailable::new(std::io::Error::other("store offline")))
    }
}

/// Builds a task from raw parts, panicking on invalid fixture input.
pub fn task(id: i64, title: &str, status: Status, board: &str) -> Task {
    Task::new(
        TaskId::new(id),
        TaskTitle::new(title).expect("valid fixture title"),
        String::new(),
        status,
        BoardName::new(board).expect("valid fixture board"),
    )
}

/// Builds a validated board name, panicking on invalid fixture input.
pub fn board(name: &str) -> BoardName {
    BoardName::new(name).expect("valid fixture board")
}
