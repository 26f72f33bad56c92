//! Captured tool transcripts
//!
//! Trimmed from real sessions; the banner noise is kept because the
//! interpreter must skip it the same way it does in production.

/// Fresh install of the Steamworks SDK redistributable.
pub const UPDATE_FRESH_INSTALL: &str = "\
Redirecting stderr to '/opt/steamcmd/logs/stderr.txt'
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
Waiting for user info...OK
 Update state (0x61) downloading, progress: 42.07 (29111896 / 69205922)
 Update state (0x61) downloading, progress: 100.00 (69205922 / 69205922)
Success! App '1007' fully installed.
";

/// Re-run against an install that is already at the requested build.
/// Note the tool prints a success line here too.
pub const UPDATE_ALREADY_CURRENT: &str = "\
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
Waiting for user info...OK
Success! App '1007' already up to date.
";

/// Unknown (or unsubscribed) app id.
pub const UPDATE_NO_SUBSCRIPTION: &str = "\
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
Waiting for user info...OK
ERROR! Failed to install app '4' (No subscription)
";

/// Generic tool failure with a misleading zero exit code.
pub const UPDATE_DOWNLOAD_ERROR: &str = "\
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
ERROR! Download failed (connection reset by peer)
";

/// Anonymous login rejected.
pub const LOGIN_FAILURE: &str = "\
Loading Steam API...OK
Connecting anonymously to Steam Public...FAILED login with result code 5
";

/// Default (live) branch version query.
pub const VERSION_DEFAULT_BRANCH: &str = "\
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
Waiting for user info...OK
AppID 730 (Counter-Strike: Global Offensive)
 - release state: released
 - BuildID 13185977
";

/// Historical branch query; static metadata with a description line and
/// no live timestamp.
pub const VERSION_HISTORICAL_BRANCH: &str = "\
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
Waiting for user info...OK
AppID 730 (Counter-Strike: Global Offensive), branch 1.21.3.1
 - BuildID 611429
 - Description Game version 1.21.3.1 (16-Nov-2012)
";

/// Transcript with no markers at all and a zero exit; must classify as
/// ambiguous, never as success.
pub const SILENT_ZERO_EXIT: &str = "\
Loading Steam API...OK
Unloading Steam API...OK
";

/// `app_info_print` output for app 730, banner included.
pub const APP_INFO_730: &str = "\
Steam Console Client (c) Valve Corporation - version 1734479456
-- type 'quit' to exit --
Loading Steam API...OK
Connecting anonymously to Steam Public...Logged in OK
Waiting for user info...OK
\"730\"
{
\t\"common\"
\t{
\t\t\"name\"\t\t\"Counter-Strike: Global Offensive\"
\t\t\"type\"\t\t\"Game\"
\t\t\"oslist\"\t\t\"windows,macos,linux\"
\t}
\t\"config\"
\t{
\t\t\"installdir\"\t\t\"Counter-Strike Global Offensive\"
\t}
\t\"depots\"
\t{
\t\t\"731\"
\t\t{
\t\t\t\"name\"\t\t\"csgo content\"
\t\t}
\t}
\t\"ufs\"
\t{
\t\t\"quota\"\t\t\"104857600\"
\t\t\"maxnumfiles\"\t\t\"1000\"
\t}
}
Unloading Steam API...OK
";
