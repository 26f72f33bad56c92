//! Transcript interpretation
//!
//! The tool talks to humans: success, failure, and no-op all come back as
//! prose, and the exit code is wrong often enough that it cannot be
//! trusted on its own. Every pattern the rest of the crate relies on
//! lives here, applied in a fixed priority order, so the wording coupling
//! stays in one place.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::runner::ToolOutput;

/// `BuildID 611429` — emitted by version/status queries.
static BUILD_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bBuildID\s+(\d+)").unwrap());

/// `Description Game version 1.21.3.1 (16-Nov-2012)` — emitted only for
/// historical branch queries, sometimes as a `- ` bulleted status line.
static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-\s*)?Description\s+(.+?)\s*$").unwrap());

/// `Success! App '1007' fully installed.` — also printed when nothing
/// changed, which is why the already-current check runs first.
static SUCCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Success! App '(\d+)'").unwrap());

/// Terminal outcome of one install/update invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Content changed on disk.
    Updated,
    /// Install was already at the requested build; nothing changed.
    AlreadyCurrent,
    Failed(Failure),
}

/// A classified failure, carrying the matched diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The service does not know the app id (or this account cannot see it).
    UnknownApp { line: String },
    LoginFailed { line: String },
    /// Any other explicit `ERROR!` diagnostic.
    Tool { line: String },
    /// No marker either way; the exit code alone is not proof of success.
    Ambiguous { exit_code: i32 },
}

impl Failure {
    /// Lift into the crate error type, attaching the app id under query.
    pub fn into_error(self, app_id: u32) -> Error {
        match self {
            Self::UnknownApp { line } => Error::UnknownApp {
                app_id,
                detail: line,
            },
            Self::LoginFailed { line } => Error::LoginFailed { detail: line },
            Self::Tool { line } => Error::ToolFailed { detail: line },
            Self::Ambiguous { exit_code } => Error::Ambiguous { exit_code },
        }
    }
}

/// Facts extracted from a transcript by line patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts {
    pub build_id: Option<String>,
    pub description: Option<String>,
}

/// Scan a transcript for version facts.
pub fn extract_facts(stdout: &str) -> Facts {
    let mut facts = Facts::default();
    for line in stdout.lines() {
        if facts.build_id.is_none() {
            if let Some(cap) = BUILD_ID.captures(line) {
                facts.build_id = Some(cap[1].to_string());
            }
        }
        if facts.description.is_none() {
            if let Some(cap) = DESCRIPTION.captures(line) {
                facts.description = Some(cap[1].to_string());
            }
        }
    }
    facts
}

/// Classify one invocation into a terminal [`Outcome`].
///
/// Rule order is load-bearing:
/// 1. already-up-to-date marker (the tool prints a success line in both
///    the changed and unchanged cases, so this check must come first);
/// 2. explicit failure markers;
/// 3. success line or captured build id, with a zero exit code;
/// 4. everything else is [`Failure::Ambiguous`] — a silent zero exit is
///    surfaced as uncertainty, never assumed to be success.
pub fn classify(output: &ToolOutput) -> Outcome {
    if output.stdout.lines().any(is_already_current) {
        return Outcome::AlreadyCurrent;
    }
    if let Some(failure) = find_failure(&output.stdout) {
        return Outcome::Failed(failure);
    }

    let explicit_success = output.stdout.lines().any(|line| SUCCESS.is_match(line));
    let facts = extract_facts(&output.stdout);
    if output.exit_code == 0 && (explicit_success || facts.build_id.is_some()) {
        Outcome::Updated
    } else {
        Outcome::Failed(Failure::Ambiguous {
            exit_code: output.exit_code,
        })
    }
}

/// First failure marker in the transcript, if any.
pub fn find_failure(stdout: &str) -> Option<Failure> {
    for line in stdout.lines() {
        let trimmed = line.trim();
        if is_unknown_app(trimmed) {
            return Some(Failure::UnknownApp {
                line: trimmed.to_string(),
            });
        }
        if is_login_failure(trimmed) {
            return Some(Failure::LoginFailed {
                line: trimmed.to_string(),
            });
        }
        if trimmed.starts_with("ERROR!") {
            return Some(Failure::Tool {
                line: trimmed.to_string(),
            });
        }
    }
    None
}

fn is_already_current(line: &str) -> bool {
    line.to_ascii_lowercase().contains("already up to date")
}

fn is_unknown_app(line: &str) -> bool {
    line.contains("Invalid AppID")
        || line.contains("No app info for AppID")
        || line.contains("(No subscription)")
}

fn is_login_failure(line: &str) -> bool {
    line.contains("FAILED login") || line.contains("Login Failure")
}

/// Extract the nested key-value block rooted at `root_key` from a
/// transcript that mixes banner prose with pretty-printed metadata.
///
/// The tool prints the block with braces on their own lines, so a
/// line-based depth count is sufficient and avoids confusing braces
/// inside quoted values. Returns the block text including the root key
/// line, or `None` when the key never appears at depth zero.
pub fn extract_keyvalues_block(stdout: &str, root_key: &str) -> Option<String> {
    let quoted = format!("\"{root_key}\"");
    let mut block = String::new();
    let mut depth = 0usize;
    let mut in_block = false;

    for line in stdout.lines() {
        let trimmed = line.trim();
        if !in_block {
            if trimmed == quoted {
                in_block = true;
                block.push_str(line);
                block.push('\n');
            }
            continue;
        }

        block.push_str(line);
        block.push('\n');
        match trimmed {
            "{" => depth += 1,
            "}" => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(block);
                }
            }
            _ => {}
        }
    }
    None
}
