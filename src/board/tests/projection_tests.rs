//! Tests for board projection and view derivation.

use rstest::rstest;

use super::support::{board, task};
use crate::board::domain::{
    BoardView, Status, Task, board_names, resolve_active_board, visible_tasks_by_column,
};

fn mixed_collection() -> Vec<Task> {
    vec![
        task(1, "first", Status::Todo, "B"),
        task(2, "second", Status::Doing, "A"),
        task(3, "third", Status::Todo, "B"),
        task(4, "fourth", Status::Done, "C"),
    ]
}

#[rstest]
fn board_names_deduplicate_preserving_first_seen_order() {
    let boards = board_names(&mixed_collection());
    assert_eq!(boards, vec![board("B"), board("A"), board("C")]);
}

#[rstest]
fn board_names_drop_the_absent_board_sentinel() {
    let orphan: Task = serde_json::from_str(r#"{"id": 9, "title": "Orphan", "status": "todo"}"#)
        .expect("legacy record deserializes");
    let tasks = vec![orphan, task(1, "kept", Status::Todo, "A")];
    assert_eq!(board_names(&tasks), vec![board("A")]);
}

#[rstest]
fn board_names_of_an_empty_collection_is_empty() {
    assert!(board_names(&[]).is_empty());
}

#[rstest]
fn resolve_active_board_prefers_a_persisted_member() {
    let boards = vec![board("A"), board("B")];
    let resolved = resolve_active_board(&boards, Some(&board("B")));
    assert_eq!(resolved, Some(&board("B")));
}

#[rstest]
fn resolve_active_board_falls_back_when_the_preference_is_stale() {
    let boards = vec![board("A"), board("B")];
    let resolved = resolve_active_board(&boards, Some(&board("Gone")));
    assert_eq!(resolved, Some(&board("A")));
}

#[rstest]
fn resolve_active_board_defaults_to_the_first_board() {
    let boards = vec![board("A"), board("B")];
    assert_eq!(resolve_active_board(&boards, None), Some(&board("A")));
}

#[rstest]
fn resolve_active_board_of_no_boards_is_none() {
    assert_eq!(resolve_active_board(&[], Some(&board("A"))), None);
}

#[rstest]
fn visible_tasks_never_leak_other_boards() {
    let columns = visible_tasks_by_column(&mixed_collection(), &board("B"));
    for column in &columns {
        for task in column.tasks() {
            assert_eq!(task.board(), &board("B"));
        }
    }
}

#[rstest]
fn visible_tasks_preserve_collection_order_within_a_column() {
    let columns = visible_tasks_by_column(&mixed_collection(), &board("B"));
    let todo = columns
        .iter()
        .find(|column| column.status() == Status::Todo)
        .expect("todo column is always present");
    let titles: Vec<&str> = todo
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(titles, vec!["first", "third"]);
}

#[rstest]
fn every_declared_column_is_present_even_when_empty() {
    let columns = visible_tasks_by_column(&[], &board("B"));
    let statuses: Vec<Status> = columns.iter().map(|column| column.status()).collect();
    assert_eq!(statuses, Status::ALL.to_vec());
}

#[rstest]
fn board_view_without_an_active_board_renders_no_columns() {
    let view = BoardView::project(&mixed_collection(), None);
    assert!(view.columns().is_empty());
    assert_eq!(view.active(), None);
    assert_eq!(view.boards().len(), 3);
}

#[rstest]
fn board_view_column_lookup_matches_projection() {
    let active = board("A");
    let view = BoardView::project(&mixed_collection(), Some(&active));
    let doing = view.column(Status::Doing).expect("doing column present");
    assert_eq!(doing.tasks().len(), 1);
    assert!(view.column(Status::Done).is_some_and(|c| c.tasks().is_empty()));
}
