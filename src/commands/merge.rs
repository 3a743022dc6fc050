use std::path::PathBuf;

use anyhow::{Context, Result};
use kbo_core::ScheduleConfig;
use kbo_core::ics::{CalendarMeta, generate_calendar, merged_events};
use kbo_core::store::read_schedule_dir;
use owo_colors::OwoColorize;

use crate::render::render_written;

pub fn run(config: &ScheduleConfig) -> Result<()> {
    let (path, games) = write_league_calendar(config)?;

    println!("{}", render_written(&path));
    println!("\nMerged {} games into the league calendar", games.green());
    Ok(())
}

/// Write the league calendar and return its path with the number of games.
pub fn write_league_calendar(config: &ScheduleConfig) -> Result<(PathBuf, usize)> {
    let txt_dir = config.txt_dir();
    let schedules = read_schedule_dir(&txt_dir, config.year).with_context(|| {
        format!("Failed to read schedules from {} (run `crawl` first)", txt_dir.display())
    })?;

    let events = merged_events(&schedules);
    log::info!(
        "{} home-side games from {} schedule files",
        events.len(),
        schedules.len()
    );

    let ics_dir = config.ics_dir();
    std::fs::create_dir_all(&ics_dir)
        .with_context(|| format!("Failed to create {}", ics_dir.display()))?;

    let meta = CalendarMeta::league(&config.league_name, config.year);
    let path = ics_dir.join(config.league_calendar_file_name());
    std::fs::write(&path, generate_calendar(&meta, &events))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok((path, events.len()))
}
