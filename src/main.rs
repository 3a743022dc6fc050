mod commands;
mod render;
mod source;
mod utils;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use kbo_core::ScheduleConfig;

#[derive(Parser)]
#[command(name = "kbo-calendar")]
#[command(about = "Build per-team and league-wide KBO schedule calendars")]
struct Cli {
    /// Config file to use instead of ~/.config/kbo-calendar/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Season to work on (overrides the config)
    #[arg(long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the season from the league site and write per-team text schedules
    Crawl,
    /// Build one calendar per team from the text schedules
    Ics,
    /// Build the league calendar from the text schedules
    Merge,
    /// Crawl, then build team and league calendars
    All,
    /// Show the settings in effect and where output goes
    Config {
        /// Write the settings in effect (including --year) back to the config file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => ScheduleConfig::config_path()?,
    };
    let config = load_config(&config_path, cli.year)?;

    match cli.command {
        Commands::Crawl => commands::crawl::run(&config).await,
        Commands::Ics => commands::ics::run(&config),
        Commands::Merge => commands::merge::run(&config),
        Commands::All => {
            commands::crawl::run(&config).await?;
            println!();
            commands::ics::run(&config)?;
            println!();
            commands::merge::run(&config)
        }
        Commands::Config { save } => commands::config::run(&config, &config_path, save),
    }
}

/// An explicit `--config` path must exist. The default location gets a
/// commented template on first use.
fn load_config(path: &Path, year: Option<i32>) -> Result<ScheduleConfig> {
    let mut config = if path == ScheduleConfig::config_path()? {
        ScheduleConfig::load()?
    } else {
        ScheduleConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    };

    if let Some(year) = year {
        config.year = year;
        config.validate()?;
    }

    Ok(config)
}
