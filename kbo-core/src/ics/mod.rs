//! ICS calendar generation.
//!
//! Calendars are derived from stored schedule lines on every run, either
//! one per team or one merged league calendar.

mod event;
mod generate;

pub use event::{CalendarEvent, merged_events, team_events};
pub use generate::{CalendarMeta, generate_calendar};
