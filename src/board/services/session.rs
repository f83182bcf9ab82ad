//! Session context: active board, modal workflow, and command dispatch.

use mockable::Clock;

use crate::board::domain::{BoardName, BoardView, TaskId, board_names, resolve_active_board};
use crate::board::ports::{KeyValueStore, ViewSink};

use super::preferences::{self, Theme};
use super::repository::{CreateTaskRequest, PatchTaskRequest, RepositoryError, TaskRepository};

/// Transient state of the modal edit/add workflow.
///
/// The machine is session-long and cycles; commands that are not valid in
/// the current state are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// No modal is open.
    Closed,
    /// The add-task form is open.
    AddOpen,
    /// The edit form is open for the given task.
    EditOpen(TaskId),
}

/// Raw field values collected from the modal form.
///
/// Values arrive as text straight from the form controls; validation
/// happens in the repository when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    status: String,
}

impl TaskForm {
    /// Bundles the three form fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }
}

/// Discrete commands emitted by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display another board.
    SelectBoard(String),
    /// Open the add-task form.
    OpenAddModal,
    /// Submit the add-task form.
    SubmitAddModal(TaskForm),
    /// Open the edit form for a task.
    OpenEditModal(TaskId),
    /// Save the edit form.
    SaveEditModal(TaskForm),
    /// Delete the task being edited.
    DeleteFromEditModal,
    /// Close whichever modal is open, discarding input.
    CancelModal,
}

/// The session context object.
///
/// Owns the repository and the view sink, holds the active board and the
/// modal state machine, and processes one command at a time to completion.
/// Every command that mutates state ends with a full re-render, so the
/// view agrees with the store at the end of every command.
#[derive(Debug)]
pub struct BoardSession<S, C, V>
where
    S: KeyValueStore,
    C: Clock,
    V: ViewSink,
{
    repository: TaskRepository<S, C>,
    view: V,
    active_board: Option<BoardName>,
    modal: ModalState,
}

impl<S, C, V> BoardSession<S, C, V>
where
    S: KeyValueStore,
    C: Clock,
    V: ViewSink,
{
    /// Starts a session: seeds a cold store, resolves the active board
    /// from the persisted preference, and renders the initial view.
    #[must_use]
    pub fn start(store: S, clock: C, view: V) -> Self {
        let mut repository = TaskRepository::new(store, clock);
        repository.initialize();

        let tasks = repository.tasks();
        let boards = board_names(&tasks);
        let persisted = preferences::active_board(repository.store());
        let active_board = resolve_active_board(&boards, persisted.as_ref()).cloned();

        let mut session = Self {
            repository,
            view,
            active_board,
            modal: ModalState::Closed,
        };
        session.refresh();
        session
    }

    /// Routes a typed command to its handler.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SelectBoard(name) => self.select_board(&name),
            Command::OpenAddModal => self.open_add_modal(),
            Command::SubmitAddModal(form) => self.submit_add_modal(form),
            Command::OpenEditModal(id) => self.open_edit_modal(id),
            Command::SaveEditModal(form) => self.save_edit_modal(form),
            Command::DeleteFromEditModal => self.delete_from_edit_modal(),
            Command::CancelModal => self.cancel_modal(),
        }
    }

    /// Displays the named board and persists the choice.
    ///
    /// Selections that do not name a projected board are ignored.
    pub fn select_board(&mut self, name: &str) {
        let Ok(board) = BoardName::new(name) else {
            log::debug!("ignoring selection of empty board name");
            return;
        };
        let tasks = self.repository.tasks();
        if !board_names(&tasks).contains(&board) {
            log::debug!("ignoring selection of unknown board '{board}'");
            return;
        }
        preferences::set_active_board(self.repository.store_mut(), &board);
        self.active_board = Some(board);
        self.refresh();
    }

    /// Opens the add-task form. Valid only while no modal is open.
    pub fn open_add_modal(&mut self) {
        if self.modal != ModalState::Closed {
            log::debug!("ignoring open-add command while a modal is open");
            return;
        }
        self.modal = ModalState::AddOpen;
    }

    /// Submits the add-task form against the active board.
    ///
    /// On success the form closes and the view refreshes; on validation
    /// failure the form stays open, the error is surfaced through the view
    /// sink, and nothing is mutated.
    pub fn submit_add_modal(&mut self, form: TaskForm) {
        if self.modal != ModalState::AddOpen {
            log::debug!("ignoring add-form submission while the form is not open");
            return;
        }
        let board = self
            .active_board
            .as_ref()
            .map(BoardName::as_str)
            .unwrap_or_default()
            .to_owned();
        let request =
            CreateTaskRequest::new(form.title, form.status, board).with_description(form.description);
        match self.repository.create(request) {
            Ok(_) => {
                self.modal = ModalState::Closed;
                self.refresh();
            }
            Err(err) => self.view.show_error(&err),
        }
    }

    /// Opens the edit form for the given task and hands its snapshot to
    /// the view sink for pre-filling.
    ///
    /// Ignored while a modal is open or when the id matches no task.
    pub fn open_edit_modal(&mut self, id: TaskId) {
        if self.modal != ModalState::Closed {
            log::debug!("ignoring open-edit command while a modal is open");
            return;
        }
        let tasks = self.repository.tasks();
        let Some(task) = tasks.iter().find(|task| task.id() == id) else {
            log::debug!("ignoring open-edit command for unknown task {id}");
            return;
        };
        self.view.present_task(task);
        self.modal = ModalState::EditOpen(id);
    }

    /// Saves the edit form over the task being edited.
    ///
    /// The task is patched with every form field plus the active board. A
    /// missing task counts as already resolved: the form closes and the
    /// view refreshes as if the save had succeeded. A validation failure
    /// keeps the form open with the error surfaced, mirroring the add
    /// form.
    pub fn save_edit_modal(&mut self, form: TaskForm) {
        let ModalState::EditOpen(id) = self.modal else {
            log::debug!("ignoring edit-form save while the form is not open");
            return;
        };
        let mut request = PatchTaskRequest::new()
            .with_title(form.title)
            .with_description(form.description)
            .with_status(form.status);
        if let Some(board) = &self.active_board {
            request = request.with_board(board.as_str());
        }
        match self.repository.patch(id, request) {
            Ok(_) => {}
            Err(RepositoryError::NotFound(err)) => {
                log::debug!("edit target already removed: {err}");
            }
            Err(RepositoryError::Validation(err)) => {
                self.view.show_error(&err);
                return;
            }
        }
        self.modal = ModalState::Closed;
        self.refresh();
    }

    /// Deletes the task being edited and closes the form.
    ///
    /// A missing task counts as already resolved.
    pub fn delete_from_edit_modal(&mut self) {
        let ModalState::EditOpen(id) = self.modal else {
            log::debug!("ignoring delete command while the edit form is not open");
            return;
        };
        if let Err(err) = self.repository.delete(id) {
            log::debug!("delete target already removed: {err}");
        }
        self.modal = ModalState::Closed;
        self.refresh();
    }

    /// Closes whichever modal is open, discarding transient input.
    pub fn cancel_modal(&mut self) {
        if self.modal == ModalState::Closed {
            log::debug!("ignoring cancel command while no modal is open");
            return;
        }
        self.modal = ModalState::Closed;
    }

    /// Returns the current modal workflow state.
    #[must_use]
    pub const fn modal_state(&self) -> ModalState {
        self.modal
    }

    /// Returns the board currently displayed, if any.
    #[must_use]
    pub const fn active_board(&self) -> Option<&BoardName> {
        self.active_board.as_ref()
    }

    /// Projects the current view state without rendering it.
    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        BoardView::project(&self.repository.tasks(), self.active_board.as_ref())
    }

    /// Returns the repository for read access.
    #[must_use]
    pub const fn repository(&self) -> &TaskRepository<S, C> {
        &self.repository
    }

    /// Mutable repository access for tests that change the collection
    /// behind the workflow's back.
    #[cfg(test)]
    pub(crate) const fn repository_mut(&mut self) -> &mut TaskRepository<S, C> {
        &mut self.repository
    }

    /// Returns the view sink, letting tests inspect what was rendered.
    #[must_use]
    pub const fn view_sink(&self) -> &V {
        &self.view
    }

    /// Reads the sidebar visibility flag.
    #[must_use]
    pub fn sidebar_visible(&self) -> bool {
        preferences::sidebar_visible(self.repository.store())
    }

    /// Persists the sidebar visibility flag.
    pub fn set_sidebar_visible(&mut self, visible: bool) {
        preferences::set_sidebar_visible(self.repository.store_mut(), visible);
    }

    /// Reads the theme preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        preferences::theme(self.repository.store())
    }

    /// Persists the theme preference.
    pub fn set_theme(&mut self, theme: Theme) {
        preferences::set_theme(self.repository.store_mut(), theme);
    }

    fn refresh(&mut self) {
        let view = self.snapshot();
        self.view.render(&view);
    }
}
