//! Public driver facade
//!
//! [`SteamCmd`] ties the runner, the transcript rules, the manifest
//! reader, and the clock together. It keeps no cross-call state: every
//! operation runs at most one tool invocation and returns an owned
//! record, so concurrent calls against distinct apps or install
//! directories are safe. Calls racing on one install directory are not
//! coordinated here — the tool itself cannot handle that, serialization
//! is the caller's job.

use std::path::Path;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::manifest;
use crate::options::Options;
use crate::runner::{CommandRunner, ProcessRunner};
use crate::transcript::{self, Outcome};
use crate::update;
use crate::version::{VersionRecord, build_app_info_script, build_version_script};
use steamcmd_vdf::Node;

/// Driver for the external tool.
pub struct SteamCmd {
    runner: Box<dyn CommandRunner>,
    clock: Box<dyn Clock>,
}

impl Default for SteamCmd {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamCmd {
    /// Driver using the real subprocess runner and system clock.
    pub fn new() -> Self {
        Self::with_runner(Box::new(ProcessRunner))
    }

    /// Driver with an injected runner (tests, custom cancellation).
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source used for freshness stamps.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Full metadata tree for `app_id`, rooted at the app's own section.
    ///
    /// The transcript mixes banner prose with the key-value block; the
    /// block is sliced out first, then parsed with the shared tree
    /// parser. An id absent from the output means the service does not
    /// know the app — that is [`Error::UnknownApp`], not a parse failure.
    pub async fn app_info(&self, app_id: u32, opts: &Options) -> Result<Node> {
        opts.validate()?;
        let script = build_app_info_script(app_id);
        let output = self.runner.run(&opts.bin_dir, &script).await?;

        if let Some(failure) = transcript::find_failure(&output.stdout) {
            return Err(failure.into_error(app_id));
        }

        let key = app_id.to_string();
        let block = transcript::extract_keyvalues_block(&output.stdout, &key)
            .ok_or_else(|| Error::UnknownApp {
                app_id,
                detail: "no metadata section in tool output".to_string(),
            })?;

        let root = steamcmd_vdf::parse(&block)?;
        root.get(&key).cloned().ok_or_else(|| Error::UnknownApp {
            app_id,
            detail: "metadata section lacks the requested app id".to_string(),
        })
    }

    /// Remote version of `app_id` on `branch` (empty = default branch).
    ///
    /// Default-branch records are stamped `updated_at` with the clock at
    /// call completion: the live stream is fresh "as of now". Named
    /// branches are static history, so they carry the recorded
    /// description instead and never an `updated_at`.
    pub async fn app_version_remote(
        &self,
        app_id: u32,
        branch: &str,
        opts: &Options,
    ) -> Result<VersionRecord> {
        opts.validate()?;
        let script = build_version_script(app_id, branch);
        let output = self.runner.run(&opts.bin_dir, &script).await?;

        if let Some(failure) = transcript::find_failure(&output.stdout) {
            return Err(failure.into_error(app_id));
        }

        let facts = transcript::extract_facts(&output.stdout);
        let build_id = facts.build_id.ok_or(Error::Ambiguous {
            exit_code: output.exit_code,
        })?;
        debug!(app_id, branch, build_id = %build_id, "resolved remote version");

        if branch.is_empty() {
            Ok(VersionRecord {
                build_id,
                branch: None,
                description: None,
                updated_at: Some(self.clock.now()),
            })
        } else {
            Ok(VersionRecord {
                build_id,
                branch: Some(branch.to_string()),
                description: facts.description,
                updated_at: None,
            })
        }
    }

    /// Installed version of `app_id` under `opts.app_dir`.
    ///
    /// Purely a manifest read; no subprocess is spawned. Raises
    /// [`Error::NotInstalled`] when no manifest exists.
    pub async fn app_version_installed(
        &self,
        app_id: u32,
        opts: &Options,
    ) -> Result<VersionRecord> {
        let record = manifest::read_manifest(&opts.app_dir, app_id)?;
        Ok(VersionRecord {
            build_id: record.build_id,
            branch: record.branch,
            description: None,
            updated_at: record.updated_at,
        })
    }

    /// Install or update `app_id` into `opts.app_dir`.
    ///
    /// Returns `true` when content changed, `false` when the install was
    /// already at the requested build. Every failure, including the
    /// ambiguous silent-success case, is an error.
    pub async fn update_app(&self, app_id: u32, opts: &Options) -> Result<bool> {
        match update::run_update(self.runner.as_ref(), app_id, opts).await? {
            Outcome::Updated => Ok(true),
            Outcome::AlreadyCurrent => Ok(false),
            Outcome::Failed(failure) => Err(failure.into_error(app_id)),
        }
    }

    /// Like [`Self::update_app`] but exposing the full tri-state outcome.
    pub async fn update_app_outcome(&self, app_id: u32, opts: &Options) -> Result<Outcome> {
        update::run_update(self.runner.as_ref(), app_id, opts).await
    }

    /// Manifest location this driver reads for `app_id`.
    pub fn manifest_path(app_dir: &Path, app_id: u32) -> std::path::PathBuf {
        manifest::manifest_path(app_dir, app_id)
    }
}
