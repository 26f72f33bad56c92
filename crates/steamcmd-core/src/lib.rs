//! Typed driver for the SteamCMD content-distribution CLI
//!
//! Presents a clean programmatic contract over the tool's human-oriented
//! text protocol: metadata queries return a parsed key-value tree,
//! version queries return normalized records, and updates return a
//! deterministic tri-state outcome even though the tool's own exit codes
//! are unreliable.

pub mod client;
pub mod clock;
pub mod error;
pub mod manifest;
pub mod options;
pub mod runner;
pub mod transcript;
pub mod update;
pub mod version;

pub use client::SteamCmd;
// The shared tree parser, re-exported so callers navigate app-info
// records without naming the parser crate themselves.
pub use steamcmd_vdf::{Mapping, Node};
pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use manifest::ManifestRecord;
pub use options::Options;
pub use runner::{CommandRunner, ProcessRunner, ToolOutput};
pub use transcript::{Failure, Outcome};
pub use version::VersionRecord;
