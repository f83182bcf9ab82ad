//! Key-value store port for whole-value text persistence.

use std::sync::Arc;
use thiserror::Error;

/// Well-known keys in the backing store.
pub mod keys {
    /// The serialized task collection (JSON array of task objects).
    pub const TASKS: &str = "tasks";
    /// The JSON-encoded name of the board displayed last.
    pub const ACTIVE_BOARD: &str = "activeBoard";
    /// Sidebar visibility flag, `"true"` or `"false"`.
    pub const SHOW_SIDEBAR: &str = "showSideBar";
    /// Theme preference, `"enabled"` (light) or `"disabled"` (dark).
    pub const LIGHT_THEME: &str = "light-theme";
}

/// Error raised when the backing store cannot be read or written.
///
/// The repository and preference layers absorb this error — a failed read
/// degrades to the empty collection, a failed write is dropped — so it
/// never crosses the service boundary.
#[derive(Debug, Clone, Error)]
#[error("store unavailable: {0}")]
pub struct StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>);

impl StoreUnavailable {
    /// Wraps an adapter-level error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreUnavailable>;

/// Whole-value persistence contract.
///
/// The store holds opaque text under string keys and only supports reading
/// and replacing a value in full; callers own serialization. Access is
/// synchronous — there is exactly one session and no concurrent writer.
pub trait KeyValueStore {
    /// Loads the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreUnavailable`] when the underlying store cannot be
    /// read.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreUnavailable`] when the underlying store cannot be
    /// written.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
