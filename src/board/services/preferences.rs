//! Preference reads and writes at the session context boundary.
//!
//! The active board and the two presentation flags live in the same store
//! as the task collection but outside the repository's remit. Every
//! function here absorbs store failures the same way the repository does:
//! a failed read degrades to the default, a failed write is logged and
//! dropped.

use crate::board::domain::BoardName;
use crate::board::ports::{KeyValueStore, keys};

/// Colour theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light theme, stored as `"enabled"`.
    Light,
    /// Dark theme, stored as `"disabled"`. The default.
    #[default]
    Dark,
}

impl Theme {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "enabled",
            Self::Dark => "disabled",
        }
    }
}

/// Reads the persisted active-board preference.
///
/// The value is a JSON-encoded string; anything absent, unreadable, or
/// malformed resolves to `None` and the session falls back to the first
/// projected board.
#[must_use]
pub fn active_board<S: KeyValueStore>(store: &S) -> Option<BoardName> {
    let text = load(store, keys::ACTIVE_BOARD)?;
    let name: String = match serde_json::from_str(&text) {
        Ok(name) => name,
        Err(err) => {
            log::warn!("discarding malformed active-board preference: {err}");
            return None;
        }
    };
    BoardName::new(name).ok()
}

/// Persists the active-board preference.
pub fn set_active_board<S: KeyValueStore>(store: &mut S, board: &BoardName) {
    match serde_json::to_string(board.as_str()) {
        Ok(text) => save(store, keys::ACTIVE_BOARD, &text),
        Err(err) => log::warn!("failed to encode active-board preference: {err}"),
    }
}

/// Reads the sidebar visibility flag. Defaults to hidden when unset.
#[must_use]
pub fn sidebar_visible<S: KeyValueStore>(store: &S) -> bool {
    load(store, keys::SHOW_SIDEBAR).as_deref() == Some("true")
}

/// Persists the sidebar visibility flag.
pub fn set_sidebar_visible<S: KeyValueStore>(store: &mut S, visible: bool) {
    save(store, keys::SHOW_SIDEBAR, if visible { "true" } else { "false" });
}

/// Reads the theme preference. Defaults to dark when unset.
#[must_use]
pub fn theme<S: KeyValueStore>(store: &S) -> Theme {
    if load(store, keys::LIGHT_THEME).as_deref() == Some(Theme::Light.as_str()) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Persists the theme preference.
pub fn set_theme<S: KeyValueStore>(store: &mut S, theme: Theme) {
    save(store, keys::LIGHT_THEME, theme.as_str());
}

fn load<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store.load(key).unwrap_or_else(|err| {
        log::warn!("failed to read preference '{key}': {err}");
        None
    })
}

fn save<S: KeyValueStore>(store: &mut S, key: &str, value: &str) {
    if let Err(err) = store.save(key, value) {
        log::warn!("dropped write of preference '{key}': {err}");
    }
}
