//! ICS document generation.

use chrono::{Duration, NaiveDateTime};
use icalendar::{Calendar, Component, EventLike, Property};

use super::event::CalendarEvent;
use crate::constants::{ICS_LOCAL_FORMAT, TZ_NAME, TZ_OFFSET, TZ_OFFSET_SECONDS, TZID};

/// Calendar-level fields of a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMeta {
    pub name: String,
    pub year: i32,
}

impl CalendarMeta {
    pub fn team(team: &str, year: i32) -> Self {
        CalendarMeta {
            name: format!("{year} {team} 경기일정"),
            year,
        }
    }

    pub fn league(league: &str, year: i32) -> Self {
        CalendarMeta {
            name: format!("{year} {league} 전체 경기일정"),
            year,
        }
    }

    fn product_id(&self) -> String {
        format!("-//kbo-calendar//KBO League {}//KR", self.year)
    }
}

/// Generate a calendar document holding `events` in the given order.
///
/// Output depends only on the arguments: DTSTAMP is derived from each
/// event's start rather than the clock.
pub fn generate_calendar(meta: &CalendarMeta, events: &[CalendarEvent]) -> String {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("X-WR-CALNAME", &meta.name));
    cal.append_property(Property::new("X-WR-TIMEZONE", TZID));

    for event in events {
        cal.push(to_ics_event(event));
    }
    let cal = cal.done();

    finish_document(&cal.to_string(), meta)
}

fn to_ics_event(event: &CalendarEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);

    let dtstamp = (event.start - Duration::seconds(TZ_OFFSET_SECONDS.into()))
        .format("%Y%m%dT%H%M%SZ")
        .to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    add_local_datetime(&mut ics_event, "DTSTART", event.start);
    add_local_datetime(&mut ics_event, "DTEND", event.end);

    ics_event.summary(&event.summary);
    ics_event.location(&event.location);
    ics_event.description(&event.description);

    ics_event.done()
}

/// Datetime in the fixed zone, e.g. `DTSTART;TZID=Asia/Seoul:20260328T140000`
fn add_local_datetime(ics_event: &mut icalendar::Event, name: &str, datetime: NaiveDateTime) {
    let mut prop = Property::new(name, datetime.format(ICS_LOCAL_FORMAT).to_string());
    prop.add_parameter("TZID", TZID);
    ics_event.append_property(prop);
}

fn timezone_block() -> [String; 10] {
    [
        "BEGIN:VTIMEZONE".to_string(),
        format!("TZID:{TZID}"),
        format!("X-LIC-LOCATION:{TZID}"),
        "BEGIN:STANDARD".to_string(),
        format!("TZOFFSETFROM:{TZ_OFFSET}"),
        format!("TZOFFSETTO:{TZ_OFFSET}"),
        format!("TZNAME:{TZ_NAME}"),
        "DTSTART:19700101T000000".to_string(),
        "END:STANDARD".to_string(),
        "END:VTIMEZONE".to_string(),
    ]
}

/// Post-process the icalendar crate's output
/// - Replace PRODID with ours
/// - Insert the VTIMEZONE block ahead of the first event
fn finish_document(ics: &str, meta: &CalendarMeta) -> String {
    let mut result = String::with_capacity(ics.len() + 256);
    let mut timezone_written = false;

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{}\r\n", meta.product_id()));
            continue;
        }

        if !timezone_written && (line == "BEGIN:VEVENT" || line == "END:VCALENDAR") {
            for tz_line in timezone_block() {
                result.push_str(&tz_line);
                result.push_str("\r\n");
            }
            timezone_written = true;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
