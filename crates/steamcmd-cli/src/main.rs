//! SteamCMD Manager CLI
//!
//! Thin wrapper over [`steamcmd_core::SteamCmd`]: argument parsing,
//! logging setup, and JSON-friendly output.

mod cli;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use steamcmd_core::{Options, SteamCmd};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("verbose logging enabled");
    }

    let opts = build_options(&cli)?;
    let driver = SteamCmd::new();

    match cli.command {
        Commands::AppInfo { app_id } => {
            let info = driver.app_info(app_id, &opts).await?;
            println!("{}", serde_json::to_string_pretty(&info.to_json())?);
        }
        Commands::RemoteVersion { app_id, branch } => {
            let record = driver.app_version_remote(app_id, &branch, &opts).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::InstalledVersion { app_id } => {
            let record = driver.app_version_installed(app_id, &opts).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Update { app_id } => {
            if driver.update_app(app_id, &opts).await? {
                println!("{} app {} updated", "ok".green().bold(), app_id);
            } else {
                println!("{} app {} already up to date", "ok".green().bold(), app_id);
            }
        }
    }
    Ok(())
}

/// Both directories are required for every command; clap keeps them
/// optional globals so `--help` works without them.
fn build_options(cli: &Cli) -> Result<Options> {
    let app_dir = cli
        .app_dir
        .clone()
        .ok_or("--app-dir is required (or set STEAMAPP_APP_DIR)")?;
    let bin_dir = cli
        .bin_dir
        .clone()
        .ok_or("--bin-dir is required (or set STEAMAPP_BIN_DIR)")?;

    let mut opts = Options::new(app_dir, bin_dir);
    opts.extra_flags = cli.tool_flags.clone();
    Ok(opts)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()?;
    Ok(())
}
