//! When steps for the board command BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::when;

use kanri::board::services::CreateTaskRequest;

use super::world::BoardWorld;

#[when("the repository initialises")]
fn repository_initialises(world: &mut BoardWorld) {
    world.start_state = Some(world.repository.initialize());
}

#[when(r#"a task titled "{title}" is created with status "{status}" on board "{board}""#)]
fn task_is_created(
    world: &mut BoardWorld,
    title: String,
    status: String,
    board: String,
) -> Result<(), eyre::Report> {
    let created = world
        .repository
        .create(CreateTaskRequest::new(title, status, board))
        .wrap_err("create task in scenario")?;
    world.last_created = Some(created);
    Ok(())
}

#[when("that task is deleted")]
fn task_is_deleted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    world
        .repository
        .delete(task.id())
        .wrap_err("delete task in scenario")?;
    Ok(())
}
