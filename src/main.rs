//! LFS Settings - resolve and print Git LFS server settings
//!
//! Entry point for the `lfs-settings` binary.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::io::Write;

use clap::Parser;
use lfs_settings::config::{find_def, install};
use lfs_settings::observability::{init_tracing, TracingConfig};
use lfs_settings::{Error, Report, Result, Settings};

/// Resolve the LFS server settings from the environment and print them
#[derive(Parser, Debug)]
#[command(name = "lfs-settings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print a single setting, by name or environment key (any case)
    #[arg(long, value_name = "NAME")]
    get: Option<String>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "get")]
    json: bool,

    /// Show secret values instead of masking them
    #[arg(long)]
    reveal_secrets: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LFS_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "LFS_LOG_JSON")]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingConfig {
        level: cli.log_level,
        json: cli.log_json,
    });

    tracing::info!("lfs-settings v{} starting", env!("CARGO_PKG_VERSION"));

    let settings = install(Settings::from_env())?;
    tracing::debug!(?settings, "Settings resolved");

    let output = match cli.get.as_deref() {
        Some(query) => {
            let def = find_def(query)
                .ok_or_else(|| Error::config(format!("unknown setting '{query}'")))?;
            let setting = settings
                .setting(def.name)
                .ok_or_else(|| Error::internal(format!("{} missing after resolve", def.name)))?;
            if setting.is_secret() && !cli.reveal_secrets && !setting.value().is_empty() {
                tracing::warn!(setting = def.name, "Secret masked, pass --reveal-secrets");
                format!("{}\n", lfs_settings::config::REDACTED)
            } else {
                format!("{}\n", setting.value())
            }
        }
        None => {
            let report = Report::new(settings, cli.reveal_secrets);
            if cli.json {
                format!("{}\n", report.to_json()?)
            } else {
                report.to_text()
            }
        }
    };

    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
