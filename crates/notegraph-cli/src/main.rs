use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use notegraph_cli::{
    cli::Cli,
    commands::{self, CommandContext},
    logging,
};
use notegraph_config::NotegraphConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is loaded before logging so its level can apply; an explicit
    // --config path must exist, the default location may be absent
    let config = match &cli.config {
        Some(path) => NotegraphConfig::load(path)?,
        None => match default_config_path() {
            Some(path) => NotegraphConfig::load_or_default(path)?,
            None => NotegraphConfig::default(),
        },
    };

    logging::init(logging::resolve_level(
        cli.log_level,
        cli.verbose,
        Some(&config.logging),
    ));
    debug!(?config, "Effective configuration");

    let ctx = CommandContext {
        config,
        format: cli.format,
        notes_path: cli.notes,
    };

    let output = commands::run(&ctx, cli.command)?;
    println!("{}", output);
    Ok(())
}

/// `~/.config/notegraph/config.toml` (platform config dir)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("notegraph").join("config.toml"))
}
