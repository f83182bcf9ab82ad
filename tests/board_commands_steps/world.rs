//! Shared world state for the board command BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;

use kanri::board::adapters::memory::InMemoryStore;
use kanri::board::domain::Task;
use kanri::board::services::{StartState, TaskRepository};

/// Repository type used by the BDD world.
pub type TestRepository = TaskRepository<InMemoryStore, DefaultClock>;

/// Scenario world for board command behaviour tests.
pub struct BoardWorld {
    pub repository: TestRepository,
    pub start_state: Option<StartState>,
    pub last_created: Option<Task>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: TaskRepository::new(InMemoryStore::new(), DefaultClock),
            start_state: None,
            last_created: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
