//! The closed set of teams a schedule is built for.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEAMS: [&str; 10] = [
    "삼성", "KIA", "LG", "두산", "KT", "SSG", "롯데", "한화", "NC", "키움",
];

/// Ordered set of team identifiers.
///
/// Names outside the roster are never written to any schedule, so the
/// roster decides which files exist and which games are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    teams: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for team in teams {
            let team = team.into().trim().to_string();
            if !team.is_empty() && !unique.contains(&team) {
                unique.push(team);
            }
        }
        Roster { teams: unique }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new(DEFAULT_TEAMS)
    }
}

impl From<Vec<String>> for Roster {
    fn from(teams: Vec<String>) -> Self {
        Roster::new(teams)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.teams
    }
}
