//! Shared test utilities for the steamcmd-manager workspace.
//!
//! This crate provides standardised fixtures so crate test suites and
//! the integration suite drive the same scripted tool behavior. It is a
//! dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`runner`] — [`runner::ScriptedRunner`], a canned [`CommandRunner`]
//! - [`transcripts`] — realistic captured tool output
//! - [`manifests`] — on-disk app manifest builders
//!
//! [`CommandRunner`]: steamcmd_core::CommandRunner

pub mod manifests;
pub mod runner;
pub mod transcripts;

use chrono::{DateTime, Utc};
use steamcmd_core::Clock;

/// Clock pinned to one instant, for deterministic freshness stamps.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_unix(secs: i64) -> Self {
        Self(DateTime::<Utc>::from_timestamp(secs, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
