//! Directory key-value store behaviour.

use super::helpers::Workspace;
use eyre::Result;
use jotter::task::{
    adapters::filesystem::DirectoryKeyValueStore,
    ports::{KeyValueError, KeyValueStore},
};
use rstest::rstest;

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn missing_key_reads_as_none() -> Result<()> {
    let workspace = Workspace::new()?;
    let store = workspace.open_store()?;

    assert_eq!(store.get("todo_tasks").await?, None);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn set_replaces_the_previous_value() -> Result<()> {
    let workspace = Workspace::new()?;
    let store = workspace.open_store()?;

    store.set("todo_tasks", "[]").await?;
    store.set("todo_tasks", "[{\"id\":\"1\"}]").await?;

    assert_eq!(
        store.get("todo_tasks").await?.as_deref(),
        Some("[{\"id\":\"1\"}]")
    );
    assert!(workspace.path().join("todo_tasks.json").is_file());
    assert!(!workspace.path().join("todo_tasks.json.tmp").exists());
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn values_are_visible_to_a_reopened_store() -> Result<()> {
    let workspace = Workspace::new()?;
    workspace.open_store()?.set("app_theme", "dark").await?;

    let reopened = workspace.open_store()?;

    assert_eq!(reopened.get("app_theme").await?.as_deref(), Some("dark"));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn remove_is_idempotent() -> Result<()> {
    let workspace = Workspace::new()?;
    let store = workspace.open_store()?;
    store.set("todo_tasks", "[]").await?;

    store.remove("todo_tasks").await?;
    store.remove("todo_tasks").await?;

    assert_eq!(store.get("todo_tasks").await?, None);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
#[case("../outside")]
#[case(".hidden")]
#[tokio::test(flavor = "multi_thread")]
async fn unsafe_keys_are_rejected(#[case] key: &str) -> Result<()> {
    let workspace = Workspace::new()?;
    let store = workspace.open_store()?;

    assert!(matches!(
        store.set(key, "[]").await,
        Err(KeyValueError::InvalidKey(_))
    ));
    assert!(matches!(
        store.get(key).await,
        Err(KeyValueError::InvalidKey(_))
    ));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn opening_a_missing_directory_fails() -> Result<()> {
    let workspace = Workspace::new()?;
    let missing = workspace.path().join("does-not-exist");

    assert!(matches!(
        DirectoryKeyValueStore::open(&missing),
        Err(KeyValueError::Backend(_))
    ));
    Ok(())
}
