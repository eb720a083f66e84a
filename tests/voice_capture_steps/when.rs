//! When steps for voice capture BDD scenarios.

use super::world::{CaptureWorld, run_async};
use eyre::WrapErr;
use jotter::capture::{DictationError, DictationEvent};
use rstest_bdd_macros::when;

#[when(r#"the transcript "{transcript}" is dictated"#)]
fn transcript_is_dictated(world: &mut CaptureWorld, transcript: String) -> Result<(), eyre::Report> {
    let capture = world.capture()?;
    world.last_outcome = Some(capture.handle(DictationEvent::Transcript(transcript)));
    Ok(())
}

#[when(r#"dictation fails with code {code:i64} and message "{message}""#)]
fn dictation_fails(
    world: &mut CaptureWorld,
    code: i64,
    message: String,
) -> Result<(), eyre::Report> {
    let capture = world.capture()?;
    let event = DictationEvent::Failed(DictationError::new(Some(code), message));
    world.last_outcome = Some(capture.handle(event));
    Ok(())
}

#[when("the app restarts")]
fn app_restarts(world: &mut CaptureWorld) -> Result<(), eyre::Report> {
    let previous = world.store()?;
    run_async(previous.flush()).wrap_err("flush pending writes before restart")?;
    drop(previous);

    let restarted = world.start_store();
    run_async(restarted.load_from_persistence());
    Ok(())
}
