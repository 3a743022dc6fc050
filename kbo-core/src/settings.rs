//! Configuration at ~/.config/kbo-calendar/config.toml
//!
//! Every key is optional. Environment variables prefixed with
//! `KBO_CALENDAR_` (e.g. `KBO_CALENDAR_YEAR=2027`) override the file.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FIRST_MONTH, DEFAULT_LAST_MONTH, DEFAULT_YEAR};
use crate::error::{ScheduleError, ScheduleResult};
use crate::protocol::{DEFAULT_ENDPOINT, DEFAULT_LEAGUE_ID, DEFAULT_SERIES_IDS};
use crate::roster::Roster;

static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_year() -> i32 {
    DEFAULT_YEAR
}

fn default_league_name() -> String {
    "KBO".to_string()
}

fn default_league_file_stem() -> String {
    "KBO_League".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_first_month() -> u32 {
    DEFAULT_FIRST_MONTH
}

fn default_last_month() -> u32 {
    DEFAULT_LAST_MONTH
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_league_id() -> String {
    DEFAULT_LEAGUE_ID.to_string()
}

fn default_series_ids() -> String {
    DEFAULT_SERIES_IDS.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScheduleConfig {
    #[serde(default = "default_year")]
    pub year: i32,

    /// Shown in the league calendar's name.
    #[serde(default = "default_league_name")]
    pub league_name: String,

    /// League calendar file is `<league_file_stem>_<year>.ics`.
    #[serde(default = "default_league_file_stem")]
    pub league_file_stem: String,

    #[serde(default)]
    pub teams: Roster,

    /// Parent of the text and calendar output directories.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_first_month")]
    pub first_month: u32,

    #[serde(default = "default_last_month")]
    pub last_month: u32,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_league_id")]
    pub league_id: String,

    #[serde(default = "default_series_ids")]
    pub series_ids: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            year: default_year(),
            league_name: default_league_name(),
            league_file_stem: default_league_file_stem(),
            teams: Roster::default(),
            output_dir: default_output_dir(),
            first_month: default_first_month(),
            last_month: default_last_month(),
            endpoint: default_endpoint(),
            league_id: default_league_id(),
            series_ids: default_series_ids(),
        }
    }
}

impl ScheduleConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("kbo-calendar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if no config file exists yet.
    pub fn load() -> ScheduleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`, which must exist.
    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        let config: ScheduleConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(Environment::with_prefix("KBO_CALENDAR"))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if !(1..=12).contains(&self.first_month) || !(1..=12).contains(&self.last_month) {
            return Err(ScheduleError::Config(format!(
                "Months must be within 1..=12, got {}..={}",
                self.first_month, self.last_month
            )));
        }
        if self.first_month > self.last_month {
            return Err(ScheduleError::Config(format!(
                "first_month ({}) is after last_month ({})",
                self.first_month, self.last_month
            )));
        }
        if self.teams.is_empty() {
            return Err(ScheduleError::Config("Team list is empty".into()));
        }
        // Stored lines are split on spaces and file names on `_`.
        if let Some(team) = self
            .teams
            .iter()
            .find(|team| team.contains(|c: char| c.is_whitespace() || c == '_'))
        {
            return Err(ScheduleError::Config(format!(
                "Team name '{team}' must not contain spaces or '_'"
            )));
        }
        Ok(())
    }

    pub fn months(&self) -> RangeInclusive<u32> {
        self.first_month..=self.last_month
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn txt_dir(&self) -> PathBuf {
        self.output_path()
            .join(format!("kbo_schedules_{}_txt", self.year))
    }

    pub fn ics_dir(&self) -> PathBuf {
        self.output_path()
            .join(format!("kbo_schedules_{}_ics", self.year))
    }

    pub fn team_calendar_file_name(&self, team: &str) -> String {
        format!("{team}_schedule_{}.ics", self.year)
    }

    pub fn league_calendar_file_name(&self) -> String {
        format!("{}_{}.ics", self.league_file_stem, self.year)
    }

    /// Write the effective settings to `path` as TOML.
    pub fn save(&self, path: &Path) -> ScheduleResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ScheduleError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = format!(
            "\
# kbo-calendar configuration

# Season to fetch:
# year = {DEFAULT_YEAR}

# Where the txt and ics directories are created:
# output_dir = \"{DEFAULT_OUTPUT_DIR}\"

# Teams to keep (games against anyone else are dropped):
# teams = [\"삼성\", \"KIA\", \"LG\", \"두산\", \"KT\", \"SSG\", \"롯데\", \"한화\", \"NC\", \"키움\"]

# Months to fetch (inclusive):
# first_month = {DEFAULT_FIRST_MONTH}
# last_month = {DEFAULT_LAST_MONTH}

# League calendar name and file stem:
# league_name = \"KBO\"
# league_file_stem = \"KBO_League\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kbo-calendar").join("config.toml");

        ScheduleConfig::create_default_config(&path).unwrap();
        let config = ScheduleConfig::load_from(&path).unwrap();

        assert_eq!(config.first_month, 3);
        assert_eq!(config.last_month, 10);
        assert_eq!(config.teams, Roster::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.league_calendar_file_name(), format!("KBO_League_{}.ics", config.year));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "output_dir = \"/srv/kbo\"\n\
             first_month = 4\n\
             last_month = 9\n\
             teams = [\"LG\", \"KT\"]\n",
        )
        .unwrap();

        let config = ScheduleConfig::load_from(&path).unwrap();

        assert_eq!(config.months(), 4..=9);
        assert_eq!(config.teams.len(), 2);
        assert_eq!(
            config.txt_dir(),
            PathBuf::from(format!("/srv/kbo/kbo_schedules_{}_txt", config.year))
        );
        assert_eq!(
            config.ics_dir(),
            PathBuf::from(format!("/srv/kbo/kbo_schedules_{}_ics", config.year))
        );
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = ScheduleConfig {
            year: 2025,
            teams: Roster::new(["LG", "두산"]),
            first_month: 4,
            ..ScheduleConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(ScheduleConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScheduleConfig::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ScheduleError::Config(_))));
    }

    #[test]
    fn team_names_that_break_stored_files_are_rejected() {
        for teams in [
            vec!["Lotte Giants", "LG"],
            vec!["KT_Wiz", "LG"],
            vec!["LG", "두산\t베어스"],
        ] {
            let config = ScheduleConfig {
                teams: Roster::new(teams.clone()),
                ..ScheduleConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ScheduleError::Config(_))),
                "{teams:?} should be rejected"
            );
        }
        assert!(ScheduleConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_team_in_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "teams = [\"LG\", \"KT_Wiz\"]\n").unwrap();

        let err = ScheduleConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("KT_Wiz"), "{err}");
    }

    #[test]
    fn inverted_month_range_is_rejected() {
        let config = ScheduleConfig {
            first_month: 10,
            last_month: 3,
            ..ScheduleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScheduleError::Config(_))));

        let config = ScheduleConfig {
            last_month: 13,
            ..ScheduleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn calendar_file_names() {
        let config = ScheduleConfig {
            year: 2026,
            ..ScheduleConfig::default()
        };
        assert_eq!(config.team_calendar_file_name("LG"), "LG_schedule_2026.ics");
        assert_eq!(config.league_calendar_file_name(), "KBO_League_2026.ics");
    }
}
