//! Version resolution flows: remote queries, app-info trees, and
//! manifest-backed installed records.

use assert_fs::TempDir;
use chrono::{DateTime, Utc};
use regex::Regex;
use steamcmd_core::{Error, Node, Options, SteamCmd};
use steamcmd_test_utils::manifests::{ManifestFixture, write_manifest};
use steamcmd_test_utils::runner::ScriptedRunner;
use steamcmd_test_utils::{FixedClock, transcripts};

fn opts_under(temp: &TempDir) -> Options {
    Options::new(temp.path().join("apps"), temp.path().join("bin"))
}

#[tokio::test]
async fn test_remote_default_branch_record() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::VERSION_DEFAULT_BRANCH, 0);
    let clock = FixedClock::at_unix(1_700_000_000);
    let driver = SteamCmd::with_runner(Box::new(runner)).with_clock(Box::new(clock));

    let record = driver
        .app_version_remote(730, "", &opts_under(&temp))
        .await
        .unwrap();

    let digits = Regex::new(r"^\d+$").unwrap();
    assert!(digits.is_match(&record.build_id));
    assert!(record.description.is_none());
    let updated_at = record.updated_at.unwrap();
    assert!(updated_at > DateTime::<Utc>::from_timestamp(0, 0).unwrap());
    assert_eq!(updated_at, clock.0);
}

#[tokio::test]
async fn test_remote_historical_branch_record() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::VERSION_HISTORICAL_BRANCH, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));

    let record = driver
        .app_version_remote(730, "1.21.3.1", &opts_under(&temp))
        .await
        .unwrap();

    assert_eq!(record.build_id, "611429");
    assert_eq!(
        record.description.as_deref(),
        Some("Game version 1.21.3.1 (16-Nov-2012)")
    );
    assert!(record.updated_at.is_none());
}

#[tokio::test]
async fn test_app_info_full_tree() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::APP_INFO_730, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));

    let info = driver.app_info(730, &opts_under(&temp)).await.unwrap();
    assert_eq!(
        info.walk(&["common", "name"]).and_then(Node::as_scalar),
        Some("Counter-Strike: Global Offensive")
    );
    // Last top-level section present proves the whole block was parsed.
    assert_eq!(
        info.walk(&["ufs", "quota"]).and_then(Node::as_scalar),
        Some("104857600")
    );
}

#[tokio::test]
async fn test_installed_version_after_update() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().with_output(transcripts::UPDATE_FRESH_INSTALL, 0);
    let driver = SteamCmd::with_runner(Box::new(runner));
    let opts = opts_under(&temp);

    assert!(driver.update_app(1007, &opts).await.unwrap());
    // The tool writes the manifest as part of the install; the scripted
    // runner cannot, so lay down what it would have written.
    write_manifest(
        &opts.app_dir,
        1007,
        "13185977",
        &ManifestFixture {
            name: Some("Steamworks SDK Redist"),
            last_updated: Some(1_704_067_200),
            ..Default::default()
        },
    );

    let record = driver.app_version_installed(1007, &opts).await.unwrap();
    assert!(record.build_id.chars().all(|c| c.is_ascii_digit()));
    assert!(record.branch.is_none());
    assert!(record.updated_at.unwrap() > DateTime::<Utc>::from_timestamp(0, 0).unwrap());
}

#[tokio::test]
async fn test_installed_versions_per_install_dir_are_independent() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();
    let driver = SteamCmd::with_runner(Box::new(ScriptedRunner::new()));

    write_manifest(
        &temp_a.path().join("apps"),
        1007,
        "100",
        &ManifestFixture::default(),
    );
    write_manifest(
        &temp_b.path().join("apps"),
        1007,
        "200",
        &ManifestFixture {
            betakey: Some("beta"),
            ..Default::default()
        },
    );

    let record_a = driver
        .app_version_installed(1007, &opts_under(&temp_a))
        .await
        .unwrap();
    let record_b = driver
        .app_version_installed(1007, &opts_under(&temp_b))
        .await
        .unwrap();

    assert_eq!(record_a.build_id, "100");
    assert_eq!(record_a.branch, None);
    assert_eq!(record_b.build_id, "200");
    assert_eq!(record_b.branch.as_deref(), Some("beta"));
}

#[tokio::test]
async fn test_installed_version_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let driver = SteamCmd::with_runner(Box::new(ScriptedRunner::new()));
    let err = driver
        .app_version_installed(1007, &opts_under(&temp))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotInstalled { app_id: 1007, .. }));
}
