//! On-disk manifest builders

use std::path::Path;

use steamcmd_core::SteamCmd;

/// Shape of a manifest to lay down on disk.
#[derive(Debug, Clone, Default)]
pub struct ManifestFixture<'a> {
    pub name: Option<&'a str>,
    pub betakey: Option<&'a str>,
    pub last_updated: Option<i64>,
}

/// Write an `appmanifest_<id>.acf` for `app_id` under `app_dir`,
/// creating the `steamapps` directory as the tool would.
pub fn write_manifest(app_dir: &Path, app_id: u32, build_id: &str, fixture: &ManifestFixture<'_>) {
    let mut body = String::from("\"AppState\"\n{\n");
    body.push_str(&format!("\t\"appid\"\t\t\"{app_id}\"\n"));
    if let Some(name) = fixture.name {
        body.push_str(&format!("\t\"name\"\t\t\"{name}\"\n"));
    }
    body.push_str(&format!("\t\"buildid\"\t\t\"{build_id}\"\n"));
    if let Some(secs) = fixture.last_updated {
        body.push_str(&format!("\t\"LastUpdated\"\t\t\"{secs}\"\n"));
    }
    body.push_str("\t\"UserConfig\"\n\t{\n");
    if let Some(betakey) = fixture.betakey {
        body.push_str(&format!("\t\t\"betakey\"\t\t\"{betakey}\"\n"));
    }
    body.push_str("\t\t\"language\"\t\t\"english\"\n\t}\n}\n");

    let path = SteamCmd::manifest_path(app_dir, app_id);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}
