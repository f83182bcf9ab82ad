//! Application services for the task board.

pub mod preferences;
mod repository;
mod seed;
mod session;

pub use preferences::Theme;
pub use repository::{
    CreateTaskRequest, NotFound, PatchTaskRequest, RepositoryError, StartState, TaskRepository,
};
pub use seed::{SEED_FIRST_BOARD, SEED_TASKS_JSON};
pub use session::{BoardSession, Command, ModalState, TaskForm};
