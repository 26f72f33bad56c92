//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SteamCMD Manager - inspect and update app bundles through steamcmd
#[derive(Parser, Debug)]
#[command(name = "steamapp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory where app content is installed
    #[arg(long, global = true, env = "STEAMAPP_APP_DIR")]
    pub app_dir: Option<PathBuf>,

    /// Directory holding the steamcmd binary
    #[arg(long, global = true, env = "STEAMAPP_BIN_DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Extra flag passed through to the tool (repeatable, kept in order)
    #[arg(long = "tool-flag", global = true)]
    pub tool_flags: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the full metadata tree for an app as JSON
    AppInfo {
        /// Application id
        app_id: u32,
    },

    /// Query the remote version of an app
    RemoteVersion {
        /// Application id
        app_id: u32,

        /// Release branch (empty = default live branch)
        #[arg(short, long, default_value = "")]
        branch: String,
    },

    /// Read the installed version from the app manifest
    InstalledVersion {
        /// Application id
        app_id: u32,
    },

    /// Install or update an app
    ///
    /// Exits successfully both when content changed and when the install
    /// was already current; the two cases are distinguished in output.
    Update {
        /// Application id
        app_id: u32,
    },
}
