//! Game records and their per-team projections.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::LINE_TIMESTAMP_FORMAT;
use crate::error::{ScheduleError, ScheduleResult};

/// One scheduled game, as read from a single source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
}

impl GameRecord {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The game seen from the away side, then from the home side.
    pub fn perspectives(&self) -> [TeamPerspectiveLine; 2] {
        [
            TeamPerspectiveLine {
                team: self.away_team.clone(),
                opponent: self.home_team.clone(),
                side: Side::Away,
                date: self.date,
                time: self.time,
                venue: self.venue.clone(),
            },
            TeamPerspectiveLine {
                team: self.home_team.clone(),
                opponent: self.away_team.clone(),
                side: Side::Home,
                date: self.date,
                time: self.time,
                venue: self.venue.clone(),
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "홈",
            Side::Away => "원정",
        }
    }

    /// Parse the parenthesized tag used in stored lines, e.g. `(홈)`.
    pub fn from_tag(tag: &str) -> Option<Side> {
        match tag {
            "(홈)" => Some(Side::Home),
            "(원정)" => Some(Side::Away),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.label())
    }
}

/// A game as one participant sees it.
///
/// Displays as the stored line layout:
/// `[2026.03.28 14:00] vs LG (원정) @잠실`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPerspectiveLine {
    pub team: String,
    pub opponent: String,
    pub side: Side,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
}

impl TeamPerspectiveLine {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn is_home(&self) -> bool {
        self.side == Side::Home
    }

    /// Parse one stored line belonging to `team`'s schedule file.
    ///
    /// The venue is everything after the `@`, so it may contain spaces.
    pub fn parse(team: &str, line: &str) -> ScheduleResult<Self> {
        let line = line.trim();
        if !line.starts_with('[') {
            return Err(ScheduleError::LineParse(format!("not a game line: {line}")));
        }

        let (header, rest) = line
            .split_once("] ")
            .ok_or_else(|| ScheduleError::LineParse(format!("missing timestamp: {line}")))?;
        let timestamp = header.trim_start_matches('[');
        let starts_at = NaiveDateTime::parse_from_str(timestamp, LINE_TIMESTAMP_FORMAT)
            .map_err(|e| ScheduleError::LineParse(format!("bad timestamp '{timestamp}': {e}")))?;

        let tokens: Vec<&str> = rest.split(' ').collect();
        let [marker, opponent, tag, venue_tokens @ ..] = tokens.as_slice() else {
            return Err(ScheduleError::LineParse(format!("too few fields: {line}")));
        };
        if *marker != "vs" || venue_tokens.is_empty() {
            return Err(ScheduleError::LineParse(format!("unexpected layout: {line}")));
        }
        let side = Side::from_tag(tag)
            .ok_or_else(|| ScheduleError::LineParse(format!("unknown home/away tag '{tag}'")))?;
        let venue = venue_tokens.join(" ");

        Ok(TeamPerspectiveLine {
            team: team.to_string(),
            opponent: opponent.to_string(),
            side,
            date: starts_at.date(),
            time: starts_at.time(),
            venue: venue.trim_start_matches('@').to_string(),
        })
    }
}

impl fmt::Display for TeamPerspectiveLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] vs {} {} @{}",
            self.starts_at().format(LINE_TIMESTAMP_FORMAT),
            self.opponent,
            self.side,
            self.venue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_day() -> GameRecord {
        GameRecord {
            date: NaiveDate::from_ymd_opt(2026, 3, 28).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            home_team: "LG".into(),
            away_team: "KT".into(),
            venue: "잠실".into(),
        }
    }

    #[test]
    fn perspectives_render_the_line_layout() {
        let [away, home] = opening_day().perspectives();

        assert_eq!(away.team, "KT");
        assert_eq!(away.to_string(), "[2026.03.28 14:00] vs LG (원정) @잠실");
        assert_eq!(home.team, "LG");
        assert_eq!(home.to_string(), "[2026.03.28 14:00] vs KT (홈) @잠실");
        assert!(home.is_home());
        assert!(!away.is_home());
    }

    #[test]
    fn parse_reads_back_a_rendered_line() {
        let [_, home] = opening_day().perspectives();
        let parsed = TeamPerspectiveLine::parse("LG", &home.to_string()).unwrap();
        assert_eq!(parsed, home);
    }

    #[test]
    fn parse_keeps_venues_with_spaces() {
        let line = TeamPerspectiveLine::parse("NC", "[2026.04.01 18:30] vs 롯데 (홈) @창원 NC파크").unwrap();
        assert_eq!(line.venue, "창원 NC파크");
        assert_eq!(line.to_string(), "[2026.04.01 18:30] vs 롯데 (홈) @창원 NC파크");
    }

    #[test]
    fn parse_rejects_non_game_lines() {
        for line in [
            "not a game",
            "예정된 경기 일정이 없습니다.",
            "=== 2026년 LG 경기 일정 ===",
            "[2026.13.01 14:00] vs KT (홈) @잠실",
            "[2026.03.28 14:00] vs KT",
            "[2026.03.28 14:00] at KT (홈) @잠실",
            "[2026.03.28 14:00] vs KT (중립) @잠실",
            "[2026.03.28 14:00]",
        ] {
            assert!(
                matches!(TeamPerspectiveLine::parse("LG", line), Err(ScheduleError::LineParse(_))),
                "expected a line parse error for {line:?}"
            );
        }
    }
}
