//! Subprocess execution seam
//!
//! Every public operation runs at most one tool invocation through
//! [`CommandRunner`] and blocks (cooperatively) until it exits. The trait
//! is the cancellation boundary too: no timeout is imposed here, a caller
//! wanting one wraps the future or supplies its own runner.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Captured output of one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ToolOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }
}

/// Executes one tool invocation with the given `+command` script.
///
/// Implementations must be stateless across calls; concurrent calls with
/// distinct targets are safe by construction.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, bin_dir: &Path, commands: &[String]) -> Result<ToolOutput>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<T> {
    async fn run(&self, bin_dir: &Path, commands: &[String]) -> Result<ToolOutput> {
        (**self).run(bin_dir, commands).await
    }
}

/// Production runner spawning the steamcmd binary from `bin_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Platform-specific tool binary under `bin_dir`.
    pub fn binary_path(bin_dir: &Path) -> PathBuf {
        if cfg!(windows) {
            bin_dir.join("steamcmd.exe")
        } else {
            bin_dir.join("steamcmd.sh")
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, bin_dir: &Path, commands: &[String]) -> Result<ToolOutput> {
        let binary = Self::binary_path(bin_dir);
        debug!(binary = %binary.display(), ?commands, "invoking steamcmd");

        let output = Command::new(&binary)
            .args(commands)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                path: binary.clone(),
                source,
            })?;

        // The tool's exit code is unreliable; it is captured verbatim and
        // classification stays text-driven downstream.
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(exit_code, "steamcmd exited");

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}
