//! End-to-end update orchestration flows against the scripted runner.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use steamcmd_core::{Error, Options, Outcome, SteamCmd};
use steamcmd_test_utils::runner::ScriptedRunner;
use steamcmd_test_utils::transcripts;

#[tokio::test]
async fn test_fresh_install_then_noop() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .with_output(transcripts::UPDATE_FRESH_INSTALL, 0)
        .with_output(transcripts::UPDATE_ALREADY_CURRENT, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = Options::new(temp.path().join("apps"), temp.path().join("bin"));

    assert!(driver.update_app(1007, &opts).await.unwrap());
    // Immediately repeating with no other state change is a no-op.
    assert!(!driver.update_app(1007, &opts).await.unwrap());
}

#[tokio::test]
async fn test_update_script_pins_install_dir() {
    let temp = TempDir::new().unwrap();
    let runner =
        std::sync::Arc::new(ScriptedRunner::new().with_output(transcripts::UPDATE_FRESH_INSTALL, 0));
    let driver = SteamCmd::with_runner(Box::new(runner.clone()));

    let app_dir = temp.path().join("apps");
    let bin_dir = temp.path().join("bin");
    let opts = Options::new(&app_dir, &bin_dir);
    driver.update_app(90, &opts).await.unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].bin_dir, bin_dir);

    let script = &invocations[0].commands;
    let dir_arg = app_dir.display().to_string();
    assert!(script.windows(2).any(|w| w[0] == "+force_install_dir" && w[1] == dir_arg));
    // The HLDS workaround flag rides along for app 90.
    assert!(script.windows(2).any(|w| w[0] == "90" && w[1] == "validate"));
    assert_eq!(script.last().map(String::as_str), Some("+quit"));
}

#[tokio::test]
async fn test_outcome_variant_distinguishes_noop_from_change() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new()
        .with_output(transcripts::UPDATE_FRESH_INSTALL, 0)
        .with_output(transcripts::UPDATE_ALREADY_CURRENT, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = Options::new(temp.path().join("apps"), temp.path().join("bin"));

    assert_eq!(
        driver.update_app_outcome(1007, &opts).await.unwrap(),
        Outcome::Updated
    );
    assert_eq!(
        driver.update_app_outcome(1007, &opts).await.unwrap(),
        Outcome::AlreadyCurrent
    );
}

#[tokio::test]
async fn test_relative_app_dir_fails_before_any_side_effect() {
    let temp = TempDir::new().unwrap();
    // No output queued: spawning would panic inside the scripted runner.
    let driver = SteamCmd::with_runner(Box::new(ScriptedRunner::new()));
    let opts = Options::new("relative/install/path", temp.path().join("bin"));

    let err = driver.update_app(1007, &opts).await.unwrap_err();
    assert!(matches!(err, Error::Usage { .. }));

    // The install directory must not have been created.
    temp.child("relative").assert(predicate::path::missing());
    assert!(!std::path::Path::new("relative/install/path").exists());
}

#[tokio::test]
async fn test_unknown_app_id_is_typed_failure() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::UPDATE_NO_SUBSCRIPTION, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = Options::new(temp.path().join("apps"), temp.path().join("bin"));

    let err = driver.update_app(4, &opts).await.unwrap_err();
    match err {
        Error::UnknownApp { app_id, detail } => {
            assert_eq!(app_id, 4);
            assert!(detail.contains("No subscription"));
        }
        other => panic!("expected UnknownApp, got {other:?}"),
    }
}

#[tokio::test]
async fn test_download_error_with_zero_exit_still_fails() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::UPDATE_DOWNLOAD_ERROR, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = Options::new(temp.path().join("apps"), temp.path().join("bin"));

    let err = driver.update_app(1007, &opts).await.unwrap_err();
    assert!(matches!(err, Error::ToolFailed { .. }));
}

#[tokio::test]
async fn test_login_failure_is_distinguished() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::LOGIN_FAILURE, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = Options::new(temp.path().join("apps"), temp.path().join("bin"));

    let err = driver.update_app(1007, &opts).await.unwrap_err();
    assert!(matches!(err, Error::LoginFailed { .. }));
}

#[tokio::test]
async fn test_silent_zero_exit_surfaces_as_ambiguous() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::SILENT_ZERO_EXIT, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = Options::new(temp.path().join("apps"), temp.path().join("bin"));

    let err = driver.update_app(1007, &opts).await.unwrap_err();
    assert!(matches!(err, Error::Ambiguous { exit_code: 0 }));
}
