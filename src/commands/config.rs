use std::path::Path;

use anyhow::{Context, Result};
use kbo_core::ScheduleConfig;
use owo_colors::OwoColorize;

pub fn run(config: &ScheduleConfig, config_path: &Path, save: bool) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Schedules:  {}", config.txt_dir().display());
    println!("  Calendars:  {}", config.ics_dir().display());

    println!("\n{}", "Season".bold());
    println!("  Year:       {}", config.year);
    println!("  Months:     {}-{}", config.first_month, config.last_month);
    let teams: Vec<&str> = config.teams.iter().collect();
    println!("  Teams:      {}", teams.join(", "));

    if save {
        config
            .save(config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        println!("\n{} {}", "Saved".green(), config_path.display());
    }

    Ok(())
}
