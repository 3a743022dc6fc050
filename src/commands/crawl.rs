use std::path::PathBuf;

use anyhow::{Context, Result};
use kbo_core::ScheduleConfig;
use kbo_core::crawl::{ScheduleSource, crawl_season};
use kbo_core::store::write_book;
use owo_colors::OwoColorize;

use crate::render::{Render, render_written};
use crate::source::HttpSource;

pub async fn run(config: &ScheduleConfig) -> Result<()> {
    let source = HttpSource::new(config)?;
    let written = crawl_into(&source, config).await?;

    println!("\nWrote {} team schedules", written.len());
    Ok(())
}

/// Crawl the configured months and write one text schedule per roster team.
pub async fn crawl_into<S: ScheduleSource>(source: &S, config: &ScheduleConfig) -> Result<Vec<PathBuf>> {
    println!(
        "{} {}",
        format!("⚾ {} season", config.year).bold(),
        format!("(months {}-{})", config.first_month, config.last_month).dimmed()
    );

    let report = crawl_season(source, config.year, config.months(), &config.teams).await;
    println!("{}", report.render());

    let dir = config.txt_dir();
    let written = write_book(&dir, config.year, &report.book)
        .with_context(|| format!("Failed to write schedules to {}", dir.display()))?;

    for path in &written {
        println!("{}", render_written(path));
    }

    Ok(written)
}
