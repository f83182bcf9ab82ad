//! Then steps for the board command BDD scenarios.

use rstest_bdd_macros::then;

use kanri::board::domain::{Task, board_names, resolve_active_board};
use kanri::board::services::{SEED_FIRST_BOARD, SEED_TASKS_JSON};

use super::world::BoardWorld;

#[then("the collection contains exactly the seed tasks")]
fn collection_is_the_seed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let expected: Vec<Task> =
        serde_json::from_str(SEED_TASKS_JSON).map_err(|err| eyre::eyre!("seed parses: {err}"))?;
    let actual = world.repository.tasks();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected the seed collection, found {} tasks",
            actual.len()
        ));
    }
    Ok(())
}

#[then("the resolved active board is the seed's first board")]
fn active_board_is_seed_first(world: &BoardWorld) -> Result<(), eyre::Report> {
    let tasks = world.repository.tasks();
    let boards = board_names(&tasks);
    let resolved = resolve_active_board(&boards, None)
        .ok_or_else(|| eyre::eyre!("no active board resolved"))?;
    if resolved.as_str() != SEED_FIRST_BOARD {
        return Err(eyre::eyre!(
            "expected '{SEED_FIRST_BOARD}', found '{resolved}'"
        ));
    }
    Ok(())
}

#[then(r#"the board projection includes "{board}""#)]
fn projection_includes(world: &BoardWorld, board: String) -> Result<(), eyre::Report> {
    let tasks = world.repository.tasks();
    if !board_names(&tasks).iter().any(|name| name.as_str() == board) {
        return Err(eyre::eyre!("board '{board}' missing from the projection"));
    }
    Ok(())
}

#[then(r#"the board projection does not include "{board}""#)]
fn projection_excludes(world: &BoardWorld, board: String) -> Result<(), eyre::Report> {
    let tasks = world.repository.tasks();
    if board_names(&tasks).iter().any(|name| name.as_str() == board) {
        return Err(eyre::eyre!("board '{board}' still in the projection"));
    }
    Ok(())
}
