//! On-disk app manifest reader
//!
//! One installed app leaves one `appmanifest_<id>.acf` under
//! `<app_dir>/steamapps/`, a restricted instance of the same key-value
//! format the metadata queries use. This module only ever reads.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Flat record extracted from one app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    pub app_id: u32,
    pub name: Option<String>,
    pub build_id: String,
    /// Non-default branch (`UserConfig.betakey`), absent for default installs.
    pub branch: Option<String>,
    /// The manifest's own `LastUpdated` time, when recorded.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Manifest location for one app under an install directory.
pub fn manifest_path(app_dir: &Path, app_id: u32) -> PathBuf {
    app_dir
        .join("steamapps")
        .join(format!("appmanifest_{app_id}.acf"))
}

/// Read and parse the manifest for `app_id` under `app_dir`.
///
/// A missing file is [`Error::NotInstalled`] — absence, not corruption.
/// A file that exists but does not parse, or parses without the fixed
/// `AppState.appid`/`AppState.buildid` keys, is a parse/manifest error.
pub fn read_manifest(app_dir: &Path, app_id: u32) -> Result<ManifestRecord> {
    let path = manifest_path(app_dir, app_id);
    if !path.is_file() {
        return Err(Error::NotInstalled { app_id, path });
    }

    let text = std::fs::read_to_string(&path).map_err(|source| Error::io(&path, source))?;
    let root = steamcmd_vdf::parse(&text)?;

    let state = root
        .get("AppState")
        .and_then(steamcmd_vdf::Node::as_mapping)
        .ok_or_else(|| Error::manifest(&path, "missing AppState section"))?;

    let recorded_id: u32 = state
        .get_scalar("appid")
        .ok_or_else(|| Error::manifest(&path, "missing appid"))?
        .parse()
        .map_err(|_| Error::manifest(&path, "appid is not numeric"))?;
    if recorded_id != app_id {
        return Err(Error::manifest(
            &path,
            format!("manifest records app id {recorded_id}, expected {app_id}"),
        ));
    }

    let build_id = state
        .get_scalar("buildid")
        .ok_or_else(|| Error::manifest(&path, "missing buildid"))?
        .to_string();

    let name = state.get_scalar("name").map(str::to_string);

    // An empty or "public" betakey means the default branch.
    let branch = state
        .get("UserConfig")
        .and_then(steamcmd_vdf::Node::as_mapping)
        .and_then(|config| config.get_scalar("betakey"))
        .filter(|key| !key.is_empty() && *key != "public")
        .map(str::to_string);

    let updated_at = state
        .get_scalar("LastUpdated")
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

    debug!(app_id, build_id = %build_id, ?branch, "read app manifest");

    Ok(ManifestRecord {
        app_id,
        name,
        build_id,
        branch,
        updated_at,
    })
}
