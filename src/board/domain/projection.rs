//! Pure projections from the task collection to what the view displays.
//!
//! Boards are not stored entities: the board set is derived from the
//! distinct `board` values on the tasks, so a board exists exactly as long
//! as at least one of its tasks does. [`BoardView`] bundles every derived
//! value the rendering collaborator needs and is the single source of truth
//! for "what should currently be on screen".

use super::{BoardName, Status, Task};

/// Derives the ordered set of distinct board names from the collection.
///
/// Empty names (the absent-board sentinel) are dropped; duplicates are
/// removed preserving first-seen order.
#[must_use]
pub fn board_names(tasks: &[Task]) -> Vec<BoardName> {
    let mut boards: Vec<BoardName> = Vec::new();
    for task in tasks {
        let board = task.board();
        if board.as_str().is_empty() || boards.contains(board) {
            continue;
        }
        boards.push(board.clone());
    }
    boards
}

/// Resolves which board the session should display.
///
/// The persisted preference wins when it still names a projected board;
/// otherwise the first board in the projection. `None` when the projection
/// is empty, in which case no columns are rendered.
#[must_use]
pub fn resolve_active_board<'a>(
    boards: &'a [BoardName],
    persisted: Option<&BoardName>,
) -> Option<&'a BoardName> {
    persisted
        .and_then(|preferred| boards.iter().find(|board| *board == preferred))
        .or_else(|| boards.first())
}

/// One rendered status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    status: Status,
    tasks: Vec<Task>,
}

impl Column {
    /// Returns the status this column displays.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the column's tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Groups the active board's tasks into status columns.
///
/// Tasks belonging to other boards never appear; within a column the
/// collection's relative order is preserved. Every declared column is
/// present even when empty.
#[must_use]
pub fn visible_tasks_by_column(tasks: &[Task], active_board: &BoardName) -> Vec<Column> {
    Status::ALL
        .into_iter()
        .map(|status| Column {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.board() == active_board && task.status() == status)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Everything the rendering collaborator needs to paint the screen.
///
/// Rebuilt in full after every mutation and board switch; the view layer
/// never patches incrementally, which trades render cost for the
/// elimination of view/state drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    boards: Vec<BoardName>,
    active: Option<BoardName>,
    columns: Vec<Column>,
}

impl BoardView {
    /// Projects the full view state from the collection and the active
    /// board.
    ///
    /// When `active` is absent no columns are produced.
    #[must_use]
    pub fn project(tasks: &[Task], active: Option<&BoardName>) -> Self {
        let boards = board_names(tasks);
        let columns = active
            .map(|board| visible_tasks_by_column(tasks, board))
            .unwrap_or_default();
        Self {
            boards,
            active: active.cloned(),
            columns,
        }
    }

    /// Returns the projected board names in first-seen order.
    #[must_use]
    pub fn boards(&self) -> &[BoardName] {
        &self.boards
    }

    /// Returns the board currently displayed, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&BoardName> {
        self.active.as_ref()
    }

    /// Returns the rendered columns, empty when no board is active.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column for the given status, if a board is active.
    #[must_use]
    pub fn column(&self, status: Status) -> Option<&Column> {
        self.columns.iter().find(|column| column.status == status)
    }
}
