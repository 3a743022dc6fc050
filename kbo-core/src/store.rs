//! Per-team schedule text files.
//!
//! Each team gets `<Team>_schedule_<year>.txt`: a header line, a blank line,
//! then one line per game in the layout rendered by [`TeamPerspectiveLine`].
//! These files are the durable form of a crawl; calendars are rebuilt from
//! them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ScheduleResult;
use crate::game::{GameRecord, TeamPerspectiveLine};
use crate::roster::Roster;

/// Written in place of game lines when a team has nothing scheduled.
pub const NO_GAMES_LINE: &str = "예정된 경기 일정이 없습니다.";

/// Every team's games in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleBook {
    teams: BTreeMap<String, Vec<TeamPerspectiveLine>>,
}

impl ScheduleBook {
    /// A book with an empty schedule for every roster team, so teams
    /// without games still get a file.
    pub fn for_roster(roster: &Roster) -> Self {
        ScheduleBook {
            teams: roster.iter().map(|t| (t.to_string(), Vec::new())).collect(),
        }
    }

    /// File the game under both participants.
    pub fn record(&mut self, game: &GameRecord) {
        for line in game.perspectives() {
            self.teams.entry(line.team.clone()).or_default().push(line);
        }
    }

    pub fn lines(&self, team: &str) -> &[TeamPerspectiveLine] {
        self.teams.get(team).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn teams(&self) -> impl Iterator<Item = (&str, &[TeamPerspectiveLine])> {
        self.teams.iter().map(|(team, lines)| (team.as_str(), lines.as_slice()))
    }

    /// Number of games, counting each game once.
    pub fn game_count(&self) -> usize {
        self.teams
            .values()
            .flatten()
            .filter(|line| line.is_home())
            .count()
    }
}

pub fn schedule_file_name(team: &str, year: i32) -> String {
    format!("{team}_schedule_{year}.txt")
}

fn header_line(team: &str, year: i32) -> String {
    format!("=== {year}년 {team} 경기 일정 ===")
}

/// Render a team's schedule file.
pub fn render_schedule(team: &str, year: i32, lines: &[TeamPerspectiveLine]) -> String {
    let mut out = header_line(team, year);
    out.push_str("\n\n");

    if lines.is_empty() {
        out.push_str(NO_GAMES_LINE);
        out.push('\n');
    }
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Games read back from one team's file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSchedule {
    pub team: String,
    pub lines: Vec<TeamPerspectiveLine>,
    /// Lines that looked like neither data nor known filler.
    pub skipped: usize,
}

/// Parse the contents of `team`'s schedule file.
///
/// Header, blank and placeholder lines are ignored; any other line that
/// does not parse is counted in `skipped` and the rest of the file is
/// still read.
pub fn parse_schedule(team: &str, content: &str) -> TeamSchedule {
    let mut lines = Vec::new();
    let mut skipped = 0;

    for raw in content.lines() {
        let raw = raw.trim();
        if raw.is_empty() || raw.starts_with("===") || raw == NO_GAMES_LINE {
            continue;
        }
        match TeamPerspectiveLine::parse(team, raw) {
            Ok(line) => lines.push(line),
            Err(e) => {
                log::debug!("{team}: {e}");
                skipped += 1;
            }
        }
    }

    TeamSchedule {
        team: team.to_string(),
        lines,
        skipped,
    }
}

/// Write one file per team into `dir`, creating it if needed.
pub fn write_book(dir: &Path, year: i32, book: &ScheduleBook) -> ScheduleResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (team, lines) in book.teams() {
        let path = dir.join(schedule_file_name(team, year));
        std::fs::write(&path, render_schedule(team, year, lines))?;
        log::info!("Wrote {} games to {}", lines.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// Team name encoded in a schedule file name (`LG_schedule_2026.txt` -> `LG`).
pub fn team_from_file_name(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.split('_').next().filter(|team| !team.is_empty())
}

pub fn read_schedule_file(path: &Path) -> ScheduleResult<Option<TeamSchedule>> {
    let Some(team) = team_from_file_name(path) else {
        return Ok(None);
    };
    let content = std::fs::read_to_string(path)?;
    let schedule = parse_schedule(team, &content);
    if schedule.skipped > 0 {
        log::info!("{}: skipped {} unreadable lines", path.display(), schedule.skipped);
    }
    Ok(Some(schedule))
}

/// Read every `*_schedule_<year>.txt` in `dir`, ordered by file name.
pub fn read_schedule_dir(dir: &Path, year: i32) -> ScheduleResult<Vec<TeamSchedule>> {
    let suffix = format!("_schedule_{year}.txt");

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(&suffix))
        })
        .collect();
    paths.sort();

    let mut schedules = Vec::new();
    for path in paths {
        if let Some(schedule) = read_schedule_file(&path)? {
            schedules.push(schedule);
        }
    }
    Ok(schedules)
}
