//! Given steps for voice capture BDD scenarios.

use super::world::CaptureWorld;
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut CaptureWorld) -> Result<(), eyre::Report> {
    let store = world.start_store();
    eyre::ensure!(
        store.snapshot().is_empty(),
        "expected a fresh store to start empty"
    );
    Ok(())
}
