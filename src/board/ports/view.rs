//! Rendering-collaborator port.

use crate::board::domain::{BoardView, Task, ValidationError};

/// Contract between the session and whatever paints the screen.
///
/// The session calls [`Self::render`] with a freshly projected view after
/// every repository mutation and every board switch; implementations are
/// expected to rebuild their output in full rather than patch
/// incrementally.
pub trait ViewSink {
    /// Repaints the entire view from the given projection.
    fn render(&mut self, view: &BoardView);

    /// Surfaces a rejected form submission to the user. The form stays
    /// open; no state changed.
    fn show_error(&mut self, error: &ValidationError);

    /// Delivers the snapshot used to pre-fill the edit form when the edit
    /// modal opens.
    fn present_task(&mut self, task: &Task);
}
