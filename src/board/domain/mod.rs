//! Domain model for the task board.
//!
//! The board domain models the persisted task record, the validated scalar
//! values it is built from, and the pure projections (board set, active
//! board, per-column visibility) derived from the task collection, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod projection;
mod task;

pub use error::ValidationError;
pub use ids::{BoardName, TaskId, TaskIdGenerator, TaskTitle};
pub use projection::{BoardView, Column, board_names, resolve_active_board, visible_tasks_by_column};
pub use task::{Status, Task};
