//! Calendar events derived from stored schedule lines.

use chrono::{Datelike, NaiveDateTime};

use crate::constants::{ICS_LOCAL_FORMAT, game_duration};
use crate::game::TeamPerspectiveLine;
use crate::store::TeamSchedule;
use crate::venue::city_for_venue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    pub location: String,
    pub description: String,
    pub uid: String,
}

impl CalendarEvent {
    /// Event for a team's own calendar: `vs LG (원정) 14:00`.
    pub fn for_team(line: &TeamPerspectiveLine) -> Self {
        let start = line.starts_at();
        let summary = format!(
            "vs {} {} {}",
            line.opponent,
            line.side,
            start.format("%H:%M")
        );

        CalendarEvent {
            start,
            end: start + game_duration(),
            description: format!("{summary} @{}", line.venue),
            summary,
            location: line.venue.clone(),
            uid: event_uid(start, &line.team, &line.opponent),
        }
    }

    /// Event for the league calendar: `KT vs LG (서울)`.
    ///
    /// Only the home side's line produces an event, so a game stored in
    /// both teams' files appears once.
    pub fn for_league(line: &TeamPerspectiveLine) -> Option<Self> {
        if !line.is_home() {
            return None;
        }

        let start = line.starts_at();
        let (away, home) = (&line.opponent, &line.team);
        let city = city_for_venue(&line.venue);
        let summary = format!("{away} vs {home} ({city})");

        Some(CalendarEvent {
            start,
            end: start + game_duration(),
            description: format!("{summary} @{}", line.venue),
            summary,
            location: format!("{}, {city}", line.venue),
            uid: event_uid(start, away, home),
        })
    }
}

fn event_uid(start: NaiveDateTime, first: &str, second: &str) -> String {
    format!(
        "{}-{first}-{second}@kbo{}",
        start.format(ICS_LOCAL_FORMAT),
        start.year()
    )
}

/// Events for one team, in file order.
pub fn team_events(schedule: &TeamSchedule) -> Vec<CalendarEvent> {
    schedule.lines.iter().map(CalendarEvent::for_team).collect()
}

/// League-wide events from every team's schedule, sorted by start time.
///
/// The sort is stable, so games starting together keep the order of the
/// schedules they were read from.
pub fn merged_events(schedules: &[TeamSchedule]) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = schedules
        .iter()
        .flat_map(|schedule| schedule.lines.iter())
        .filter_map(CalendarEvent::for_league)
        .collect();
    events.sort_by_key(|event| event.start);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::parse_schedule;

    fn schedules() -> Vec<TeamSchedule> {
        vec![
            parse_schedule(
                "KT",
                "[2026.03.28 14:00] vs LG (원정) @잠실\n\
                 [2026.04.03 18:30] vs 한화 (홈) @수원\n",
            ),
            parse_schedule(
                "LG",
                "[2026.03.28 14:00] vs KT (홈) @잠실\n",
            ),
            parse_schedule(
                "한화",
                "[2026.04.03 18:30] vs KT (원정) @수원\n\
                 [2026.03.31 18:30] vs 롯데 (홈) @대전\n",
            ),
            parse_schedule(
                "롯데",
                "[2026.03.31 18:30] vs 한화 (원정) @대전\n",
            ),
        ]
    }

    #[test]
    fn team_event_fields() {
        let schedule = parse_schedule("KT", "[2026.03.28 14:00] vs LG (원정) @잠실\n");
        let events = team_events(&schedule);

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.summary, "vs LG (원정) 14:00");
        assert_eq!(event.location, "잠실");
        assert_eq!(event.description, "vs LG (원정) 14:00 @잠실");
        assert_eq!(event.uid, "20260328T140000-KT-LG@kbo2026");
        assert_eq!(event.end.format("%H:%M").to_string(), "17:30");
    }

    #[test]
    fn merged_keeps_only_home_lines() {
        let events = merged_events(&schedules());

        let summaries: Vec<&str> = events.iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(
            summaries,
            vec!["KT vs LG (서울)", "롯데 vs 한화 (대전)", "한화 vs KT (수원)"]
        );
        assert_eq!(events[0].location, "잠실, 서울");
        assert_eq!(events[0].uid, "20260328T140000-KT-LG@kbo2026");
    }

    #[test]
    fn merged_count_equals_games_not_lines() {
        let schedules = schedules();
        let lines: usize = schedules.iter().map(|s| s.lines.len()).sum();
        let events = merged_events(&schedules);

        assert_eq!(lines, 6);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn unmapped_venue_is_its_own_city() {
        let schedule = parse_schedule("LG", "[2026.03.28 14:00] vs KT (홈) @없는구장\n");
        let events = merged_events(&[schedule]);

        assert_eq!(events[0].summary, "KT vs LG (없는구장)");
        assert_eq!(events[0].location, "없는구장, 없는구장");
    }

    #[test]
    fn game_ending_after_midnight_rolls_over() {
        let schedule = parse_schedule("NC", "[2026.05.01 22:00] vs KT (홈) @창원\n");
        let event = &team_events(&schedule)[0];
        assert_eq!(event.end.format("%Y%m%dT%H%M%S").to_string(), "20260502T013000");
    }
}
