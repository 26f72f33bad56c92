//! Update orchestration
//!
//! One call walks Validating, Invoking, Classifying and ends in one of
//! three terminal states: updated, already current, or failed. The tool's
//! exit code never decides the outcome on its own; see [`crate::transcript`].

use tracing::{debug, info};

use crate::error::Result;
use crate::options::Options;
use crate::runner::CommandRunner;
use crate::transcript::{self, Outcome};

/// Extra `app_update` flags required per app id.
///
/// The legacy GoldSrc dedicated server (HLDS, app 90) exits cleanly
/// without installing anything unless `validate` is passed. This is a
/// fixed table keyed on observed behavior, never inferred from output.
const WORKAROUND_FLAGS: &[(u32, &[&str])] = &[(90, &["validate"])];

/// Workaround flags for `app_id`, empty for well-behaved apps.
pub fn workaround_flags(app_id: u32) -> &'static [&'static str] {
    WORKAROUND_FLAGS
        .iter()
        .find(|(id, _)| *id == app_id)
        .map(|(_, flags)| *flags)
        .unwrap_or(&[])
}

/// Script for one install/update invocation.
///
/// `force_install_dir` must precede `login`, otherwise the tool anchors
/// the install under its own directory. Caller flags come after the
/// workaround flags, in the order given.
pub fn build_update_script(app_id: u32, opts: &Options) -> Vec<String> {
    let mut commands = vec![
        "+force_install_dir".to_string(),
        opts.app_dir.display().to_string(),
        "+login".to_string(),
        "anonymous".to_string(),
        "+app_update".to_string(),
        app_id.to_string(),
    ];
    commands.extend(workaround_flags(app_id).iter().map(|flag| flag.to_string()));
    commands.extend(opts.extra_flags.iter().cloned());
    commands.push("+quit".to_string());
    commands
}

/// Install or update `app_id` into `opts.app_dir`.
///
/// Validation happens before any subprocess is spawned, so a bad
/// `app_dir` never creates an install directory. The returned outcome is
/// the transcript classification mapped one-to-one.
pub async fn run_update(
    runner: &dyn CommandRunner,
    app_id: u32,
    opts: &Options,
) -> Result<Outcome> {
    opts.validate()?;

    let script = build_update_script(app_id, opts);
    debug!(app_id, app_dir = %opts.app_dir.display(), "starting app update");
    let output = runner.run(&opts.bin_dir, &script).await?;

    let outcome = transcript::classify(&output);
    info!(app_id, ?outcome, exit_code = output.exit_code, "app update finished");
    Ok(outcome)
}
