//! Fixed values shared across the pipeline.

use chrono::Duration;

/// Months of the regular season that get fetched (inclusive).
pub const DEFAULT_FIRST_MONTH: u32 = 3;
pub const DEFAULT_LAST_MONTH: u32 = 10;

pub const DEFAULT_YEAR: i32 = 2026;

/// A minimum of 9 cells is needed before a row can carry its own date.
pub const DATE_ROW_MIN_CELLS: usize = 9;

/// `Class` value marking the cell that carries a date.
pub const DATE_CELL_CLASS: &str = "day";

/// Timestamp layout inside `[...]` on every stored line.
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M";

/// Games have no end time in the source; baseball games get a fixed slot.
pub fn game_duration() -> Duration {
    Duration::hours(3) + Duration::minutes(30)
}

pub const TZID: &str = "Asia/Seoul";
pub const TZ_NAME: &str = "KST";
pub const TZ_OFFSET: &str = "+0900";
pub const TZ_OFFSET_SECONDS: i32 = 9 * 3600;

/// Local (zone-qualified) timestamps inside calendar files.
pub const ICS_LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
