//! Schedule API wire types.
//!
//! The league site answers a form POST with JSON shaped like
//! `{"rows": [{"row": [{"Text": "...", "Class": "day"}, ...]}, ...]}`.
//! Cell text carries HTML markup; `Class` marks the date cell.

use serde::{Deserialize, Serialize};

use crate::constants::DATE_CELL_CLASS;

pub const DEFAULT_ENDPOINT: &str = "https://www.koreabaseball.com/ws/Schedule.asmx/GetScheduleList";
pub const DEFAULT_LEAGUE_ID: &str = "1";
/// 0: regular season, 9: exhibition games.
pub const DEFAULT_SERIES_IDS: &str = "0,9";

/// Form parameters for one month of schedule data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleQuery {
    #[serde(rename = "leId")]
    pub league_id: String,
    #[serde(rename = "srIdList")]
    pub series_ids: String,
    #[serde(rename = "seasonId")]
    pub season: String,
    #[serde(rename = "gameMonth")]
    pub month: String,
    /// Empty means every team.
    #[serde(rename = "teamId")]
    pub team: String,
}

impl ScheduleQuery {
    pub fn new(league_id: &str, series_ids: &str, season: i32, month: u32) -> Self {
        ScheduleQuery {
            league_id: league_id.to_string(),
            series_ids: series_ids.to_string(),
            season: season.to_string(),
            month: format!("{:02}", month),
            team: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

/// One table row of the schedule page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub row: Vec<RawCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCell {
    #[serde(rename = "Text", default)]
    pub text: String,
    #[serde(rename = "Class", default)]
    pub class: Option<String>,
}

impl RawCell {
    #[cfg(test)]
    pub(crate) fn new(text: &str) -> Self {
        RawCell {
            text: text.to_string(),
            class: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_class(text: &str, class: &str) -> Self {
        RawCell {
            text: text.to_string(),
            class: Some(class.to_string()),
        }
    }

    pub fn is_date_cell(&self) -> bool {
        self.class.as_deref() == Some(DATE_CELL_CLASS)
    }
}

impl RawRow {
    #[cfg(test)]
    pub(crate) fn new(cells: Vec<RawCell>) -> Self {
        RawRow { row: cells }
    }
}
