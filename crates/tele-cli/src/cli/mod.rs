//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tele_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "tele")]
#[command(version)]
#[command(about = "Terminal teleprompter: type or pick a script and let it scroll")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load configuration from this file instead of ${TELE_HOME}/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory the file browser opens in (overrides config)
    #[arg(long, value_name = "DIR")]
    start_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let config = load_config(cli.config.as_deref(), cli.start_dir)?;
        return commands::prompter::run(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn load_config(path: Option<&Path>, start_dir: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("load config")?;

    if let Some(dir) = start_dir {
        if !dir.is_dir() {
            anyhow::bail!("Start directory {} is not a directory", dir.display());
        }
        config.start_dir = Some(dir);
    }
    Ok(config)
}
