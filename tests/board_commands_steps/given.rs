//! Given steps for the board command BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::given;

use kanri::board::services::CreateTaskRequest;

use super::world::BoardWorld;

#[given("an empty store")]
fn empty_store(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.repository.tasks().is_empty() {
        return Err(eyre::eyre!("scenario store is not empty"));
    }
    Ok(())
}

#[given("an initialised repository")]
fn initialised_repository(world: &mut BoardWorld) {
    world.start_state = Some(world.repository.initialize());
}

#[given(r#"a task titled "{title}" created with status "{status}" on board "{board}""#)]
fn task_created(
    world: &mut BoardWorld,
    title: String,
    status: String,
    board: String,
) -> Result<(), eyre::Report> {
    let created = world
        .repository
        .create(CreateTaskRequest::new(title, status, board))
        .wrap_err("create task in scenario setup")?;
    world.last_created = Some(created);
    Ok(())
}
