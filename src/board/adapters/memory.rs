//! In-memory adapters for tests and throwaway sessions.

use std::collections::HashMap;

use crate::board::{
    domain::{BoardView, Task, ValidationError},
    ports::{KeyValueStore, StoreResult, ViewSink},
};

/// Key-value store backed by a plain map. Never fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, bypassing the repository. Test setup only.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns the raw text stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// View sink that records every call for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewSink {
    views: Vec<BoardView>,
    errors: Vec<ValidationError>,
    presented: Vec<Task>,
}

impl RecordingViewSink {
    /// Creates a sink with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently rendered view, if any render happened.
    #[must_use]
    pub fn last_view(&self) -> Option<&BoardView> {
        self.views.last()
    }

    /// Returns how many full renders were requested.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.views.len()
    }

    /// Returns every surfaced validation error, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns every task snapshot delivered for edit-form pre-fill.
    #[must_use]
    pub fn presented(&self) -> &[Task] {
        &self.presented
    }
}

impl ViewSink for RecordingViewSink {
    fn render(&mut self, view: &BoardView) {
        self.views.push(view.clone());
    }

    fn show_error(&mut self, error: &ValidationError) {
        self.errors.push(error.clone());
    }

    fn present_task(&mut self, task: &Task) {
        self.presented.push(task.clone());
    }
}
