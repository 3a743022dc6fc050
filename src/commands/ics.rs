use std::path::PathBuf;

use anyhow::{Context, Result};
use kbo_core::ScheduleConfig;
use kbo_core::ics::{CalendarMeta, generate_calendar, team_events};
use kbo_core::store::read_schedule_dir;

use crate::render::{Render, render_written};

pub fn run(config: &ScheduleConfig) -> Result<()> {
    let written = write_team_calendars(config)?;

    println!("\nWrote {} team calendars", written.len());
    Ok(())
}

/// One calendar per team schedule file. Teams without games get no file.
pub fn write_team_calendars(config: &ScheduleConfig) -> Result<Vec<PathBuf>> {
    let txt_dir = config.txt_dir();
    let schedules = read_schedule_dir(&txt_dir, config.year).with_context(|| {
        format!("Failed to read schedules from {} (run `crawl` first)", txt_dir.display())
    })?;

    let ics_dir = config.ics_dir();
    std::fs::create_dir_all(&ics_dir)
        .with_context(|| format!("Failed to create {}", ics_dir.display()))?;

    let mut written = Vec::new();
    for schedule in &schedules {
        println!("{}", schedule.render());

        let events = team_events(schedule);
        if events.is_empty() {
            log::info!("{}: no games, calendar not written", schedule.team);
            continue;
        }

        let meta = CalendarMeta::team(&schedule.team, config.year);
        let path = ics_dir.join(config.team_calendar_file_name(&schedule.team));
        std::fs::write(&path, generate_calendar(&meta, &events))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("{}", render_written(&path));
        written.push(path);
    }

    Ok(written)
}
