//! Version records and query script assembly

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Normalized version information for one app, remote or installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Build identifier, always one or more digits.
    pub build_id: String,
    /// Non-default branch the record refers to, when one was targeted.
    pub branch: Option<String>,
    /// Human description, present only for historical branch queries.
    pub description: Option<String>,
    /// Freshness reference: query completion time for the default/live
    /// branch, the manifest's recorded time for installed records,
    /// absent for static historical branch metadata.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Script for a remote version/status query.
///
/// The empty branch is the default live stream; a named branch is
/// queried with `-beta`.
pub fn build_version_script(app_id: u32, branch: &str) -> Vec<String> {
    let mut commands = vec![
        "+login".to_string(),
        "anonymous".to_string(),
        "+app_info_update".to_string(),
        "1".to_string(),
        "+app_status".to_string(),
        app_id.to_string(),
    ];
    if !branch.is_empty() {
        commands.push("-beta".to_string());
        commands.push(branch.to_string());
    }
    commands.push("+quit".to_string());
    commands
}

/// Script for a full app-info metadata query.
pub fn build_app_info_script(app_id: u32) -> Vec<String> {
    vec![
        "+login".to_string(),
        "anonymous".to_string(),
        "+app_info_update".to_string(),
        "1".to_string(),
        "+app_info_print".to_string(),
        app_id.to_string(),
        "+quit".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_branch_script_has_no_beta_flag() {
        let script = build_version_script(730, "");
        assert_eq!(
            script,
            vec![
                "+login",
                "anonymous",
                "+app_info_update",
                "1",
                "+app_status",
                "730",
                "+quit"
            ]
        );
    }

    #[test]
    fn test_named_branch_script_adds_beta_flag() {
        let script = build_version_script(730, "1.21.3.1");
        assert!(script.windows(2).any(|w| w == ["-beta", "1.21.3.1"]));
        assert_eq!(script.last().map(String::as_str), Some("+quit"));
    }

    #[test]
    fn test_app_info_script_refreshes_before_print() {
        let script = build_app_info_script(730);
        let update_pos = script.iter().position(|c| c == "+app_info_update").unwrap();
        let print_pos = script.iter().position(|c| c == "+app_info_print").unwrap();
        assert!(update_pos < print_pos);
    }
}
