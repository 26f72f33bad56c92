//! Per-call configuration

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Configuration for one tool operation.
///
/// `app_dir` is where application content is installed; `bin_dir` holds
/// the tool binary itself. `extra_flags` are appended verbatim to the
/// install/update command, after any built-in workaround flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub app_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub extra_flags: Vec<String>,
}

impl Options {
    pub fn new(app_dir: impl Into<PathBuf>, bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            bin_dir: bin_dir.into(),
            extra_flags: Vec::new(),
        }
    }

    /// Append an extra tool flag, keeping caller order.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.extra_flags.push(flag.into());
        self
    }

    /// Reject caller mistakes before any subprocess is spawned.
    ///
    /// A relative `app_dir` is a usage error, not a tool error: the tool
    /// would resolve it against its own working directory and silently
    /// install somewhere unexpected.
    pub fn validate(&self) -> Result<()> {
        if !self.app_dir.is_absolute() {
            return Err(Error::usage(format!(
                "app_dir must be an absolute path, got {}",
                self.app_dir.display()
            )));
        }
        Ok(())
    }
}
