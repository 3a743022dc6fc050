//! Row normalization: raw schedule rows into game records.
//!
//! The source table only prints a date on the first row of each day; later
//! rows of that day inherit it. Normalization is a fold over the rows of one
//! month carrying a [`RowState`], so a row's meaning depends only on the
//! state left by the rows before it.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::constants::DATE_ROW_MIN_CELLS;
use crate::error::{ScheduleError, ScheduleResult};
use crate::game::GameRecord;
use crate::markup::{extract_matchup, strip_markup};
use crate::protocol::{RawCell, RawRow};
use crate::roster::Roster;

static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2}\.\d{2})").expect("month/day pattern compiles"));

/// Cell positions of the fields inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowLayout {
    time: usize,
    matchup: usize,
    venue: usize,
}

const DATE_LEADING: RowLayout = RowLayout {
    time: 1,
    matchup: 2,
    venue: 7,
};

const CONTINUATION: RowLayout = RowLayout {
    time: 0,
    matchup: 1,
    venue: 6,
};

/// State carried from one row to the next within a month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    /// `MM.DD` of the most recent date-leading row.
    pub current_date: Option<String>,
}

/// What a single row contributed.
#[derive(Debug)]
pub enum RowOutcome {
    Game(GameRecord),
    /// Row with no cells at all.
    Blank,
    Skipped(ScheduleError),
}

impl RowState {
    /// Consume one row, returning the state for the next row and the row's outcome.
    pub fn step(&self, year: i32, roster: &Roster, row: &RawRow) -> (RowState, RowOutcome) {
        let cells = &row.row;
        if cells.is_empty() {
            return (self.clone(), RowOutcome::Blank);
        }

        let (state, layout) = if is_date_leading(cells) {
            let date_text = strip_markup(&cells[0].text);
            let state = match MONTH_DAY.captures(&date_text) {
                Some(caps) => RowState {
                    current_date: Some(caps[1].to_string()),
                },
                None => self.clone(),
            };
            (state, DATE_LEADING)
        } else {
            (self.clone(), CONTINUATION)
        };

        let outcome = match parse_game(year, roster, state.current_date.as_deref(), cells, layout) {
            Ok(record) => RowOutcome::Game(record),
            Err(e) => RowOutcome::Skipped(e),
        };

        (state, outcome)
    }
}

fn is_date_leading(cells: &[RawCell]) -> bool {
    cells.len() >= DATE_ROW_MIN_CELLS && cells[0].is_date_cell()
}

fn parse_game(
    year: i32,
    roster: &Roster,
    month_day: Option<&str>,
    cells: &[RawCell],
    layout: RowLayout,
) -> ScheduleResult<GameRecord> {
    if cells.len() <= layout.venue {
        return Err(ScheduleError::RowParse(format!(
            "row has {} cells, venue expected at index {}",
            cells.len(),
            layout.venue
        )));
    }

    let month_day = month_day
        .ok_or_else(|| ScheduleError::RowParse("no date to inherit".to_string()))?;

    let matchup = extract_matchup(&cells[layout.matchup].text);
    let (away, home) = matchup.teams().ok_or_else(|| {
        ScheduleError::RowParse(format!(
            "no matchup in '{}'",
            strip_markup(&cells[layout.matchup].text)
        ))
    })?;

    let full_date = format!("{year}.{month_day}");
    let date = NaiveDate::parse_from_str(&full_date, "%Y.%m.%d")
        .map_err(|e| ScheduleError::RowParse(format!("bad date '{full_date}': {e}")))?;

    let time_text = strip_markup(&cells[layout.time].text);
    let time = NaiveTime::parse_from_str(&time_text, "%H:%M")
        .map_err(|e| ScheduleError::RowParse(format!("bad time '{time_text}': {e}")))?;

    if away == home {
        return Err(ScheduleError::RowParse(format!("{away} listed against itself")));
    }
    for team in [away, home] {
        if !roster.contains(team) {
            return Err(ScheduleError::UnknownTeam(team.to_string()));
        }
    }

    Ok(GameRecord {
        date,
        time,
        home_team: home.to_string(),
        away_team: away.to_string(),
        venue: strip_markup(&cells[layout.venue].text),
    })
}

/// Counters for rows that did or did not become games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows: usize,
    pub games: usize,
    pub malformed: usize,
    pub unknown_team: usize,
}

impl NormalizeStats {
    pub fn merge(&mut self, other: NormalizeStats) {
        self.rows += other.rows;
        self.games += other.games;
        self.malformed += other.malformed;
        self.unknown_team += other.unknown_team;
    }
}

/// Games recovered from one month of rows.
#[derive(Debug, Default)]
pub struct MonthBatch {
    pub records: Vec<GameRecord>,
    pub stats: NormalizeStats,
}

impl MonthBatch {
    fn absorb(&mut self, outcome: RowOutcome) {
        self.stats.rows += 1;
        match outcome {
            RowOutcome::Game(record) => {
                self.stats.games += 1;
                self.records.push(record);
            }
            RowOutcome::Blank => {}
            RowOutcome::Skipped(ScheduleError::UnknownTeam(team)) => {
                log::debug!("Dropping game with unknown team {team}");
                self.stats.unknown_team += 1;
            }
            RowOutcome::Skipped(e) => {
                log::debug!("Skipping row: {e}");
                self.stats.malformed += 1;
            }
        }
    }
}

/// Normalize the rows of one month. Date inheritance starts empty.
pub fn normalize_month(year: i32, rows: &[RawRow], roster: &Roster) -> MonthBatch {
    let (_, batch) = rows.iter().fold(
        (RowState::default(), MonthBatch::default()),
        |(state, mut batch), row| {
            let (next, outcome) = state.step(year, roster, row);
            batch.absorb(outcome);
            (next, batch)
        },
    );
    batch
}
