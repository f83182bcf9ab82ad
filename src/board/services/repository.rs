//! Task repository: the sole mutation gateway over the persisted
//! collection.

use mockable::Clock;
use thiserror::Error;

use crate::board::domain::{
    BoardName, Status, Task, TaskId, TaskIdGenerator, TaskTitle, ValidationError,
};
use crate::board::ports::{KeyValueStore, keys};

use super::seed::SEED_TASKS_JSON;

/// Patch or delete referenced an id that is not in the collection.
///
/// Callers treat this as an idempotent no-op: the desired end state — the
/// task absent or no longer in its pre-edit shape — is unreachable or
/// already achieved.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no task with id {0}")]
pub struct NotFound(pub TaskId);

/// Errors surfaced by [`TaskRepository::patch`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A supplied field failed domain validation; nothing changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task does not exist; nothing changed.
    #[error(transparent)]
    NotFound(#[from] NotFound),
}

/// Whether [`TaskRepository::initialize`] found a cold or warm store.
///
/// Reported for logging only; callers never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartState {
    /// The store was empty and the seed collection was written.
    Seeded,
    /// Task data was already present.
    Existing,
}

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    status: String,
    board: String,
}

impl CreateTaskRequest {
    /// Creates a request with required fields and an empty description.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        status: impl Into<String>,
        board: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: status.into(),
            board: board.into(),
        }
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for patching a task. Fields left unset are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    board: Option<String>,
}

impl PatchTaskRequest {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to another status column.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Reassigns the task to another board.
    #[must_use]
    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }
}

/// Validated form of [`PatchTaskRequest`], built in full before any field
/// is merged so a rejected patch leaves no partial change behind.
struct ValidatedPatch {
    title: Option<TaskTitle>,
    description: Option<String>,
    status: Option<Status>,
    board: Option<BoardName>,
}

impl ValidatedPatch {
    fn try_from_request(request: PatchTaskRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            title: request.title.map(TaskTitle::new).transpose()?,
            description: request.description,
            status: request
                .status
                .as_deref()
                .map(Status::try_from)
                .transpose()?,
            board: request.board.map(BoardName::new).transpose()?,
        })
    }

    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.set_title(title);
        }
        if let Some(description) = self.description {
            task.set_description(description);
        }
        if let Some(status) = self.status {
            task.set_status(status);
        }
        if let Some(board) = self.board {
            task.set_board(board);
        }
    }
}

/// CRUD operations over the persisted task collection.
///
/// Every mutation is a whole-collection read-modify-write, because the
/// backing store only supports whole-value get/set. Store failures are
/// absorbed here: a failed read degrades to the empty collection, a failed
/// write is logged and dropped, and neither reaches the caller.
#[derive(Debug)]
pub struct TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    store: S,
    ids: TaskIdGenerator<C>,
}

impl<S, C> TaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates a repository over the given store and clock.
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self {
            store,
            ids: TaskIdGenerator::new(clock),
        }
    }

    /// Seeds the store with the initial dataset when the task key is
    /// absent.
    ///
    /// The returned [`StartState`] distinguishes cold start from warm start
    /// for logging only. An unreadable store is treated as warm: seeding
    /// over data that merely failed to load would destroy it.
    pub fn initialize(&mut self) -> StartState {
        match self.store.load(keys::TASKS) {
            Ok(Some(_)) => {
                log::debug!("task data already present in store");
                StartState::Existing
            }
            Ok(None) => {
                self.save_or_drop(keys::TASKS, SEED_TASKS_JSON);
                self.save_or_drop(keys::SHOW_SIDEBAR, "true");
                log::info!("initial data loaded into store");
                StartState::Seeded
            }
            Err(err) => {
                log::warn!("store unreadable during initialization: {err}");
                StartState::Existing
            }
        }
    }

    /// Returns the persisted collection in stored order.
    ///
    /// Absent, unreadable, or malformed data yields the empty collection;
    /// this operation never fails the caller.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        let text = match self.store.load(keys::TASKS) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("failed to read task collection: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(tasks) => tasks,
            Err(err) => {
                log::warn!("discarding malformed task collection: {err}");
                Vec::new()
            }
        }
    }

    /// Validates the request, appends a new task with a fresh unique id,
    /// and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the title is empty, the status does
    /// not name a declared column, or the board name is empty. Nothing is
    /// persisted on failure.
    pub fn create(&mut self, request: CreateTaskRequest) -> Result<Task, ValidationError> {
        let title = TaskTitle::new(request.title)?;
        let status = Status::try_from(request.status.as_str())?;
        let board = BoardName::new(request.board)?;

        let mut tasks = self.tasks();
        for existing in &tasks {
            self.ids.observe(existing.id());
        }
        let task = Task::new(self.ids.next_id(), title, request.description, status, board);
        tasks.push(task.clone());
        self.persist(&tasks);
        Ok(task)
    }

    /// Merges the supplied fields into the task with the given id and
    /// persists the collection.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no task has the id and
    /// [`RepositoryError::Validation`] when a supplied field is invalid; in
    /// both cases no state changes.
    pub fn patch(&mut self, id: TaskId, request: PatchTaskRequest) -> Result<Task, RepositoryError> {
        let patch = ValidatedPatch::try_from_request(request)?;
        let mut tasks = self.tasks();
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(NotFound(id))?;
        patch.apply(task);
        let updated = task.clone();
        self.persist(&tasks);
        Ok(updated)
    }

    /// Removes the task with the given id and persists the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] when no task has the id; the collection is
    /// untouched, making repeated deletes idempotent.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, NotFound> {
        let mut tasks = self.tasks();
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(NotFound(id))?;
        let removed = tasks.remove(index);
        self.persist(&tasks);
        Ok(removed)
    }

    /// Shared store access for the preference layer. The task collection
    /// itself is only ever mutated through the repository.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable counterpart of [`Self::store`].
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self, tasks: &[Task]) {
        match serde_json::to_string(tasks) {
            Ok(text) => self.save_or_drop(keys::TASKS, &text),
            Err(err) => log::warn!("failed to serialize task collection: {err}"),
        }
    }

    fn save_or_drop(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.save(key, value) {
            log::warn!("dropped write of '{key}': {err}");
        }
    }
}
