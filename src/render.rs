//! TUI rendering traits for kbo-core types.

use std::path::Path;

use kbo_core::crawl::SeasonReport;
use kbo_core::store::TeamSchedule;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for SeasonReport {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "   {} games from {} rows",
            self.stats.games.to_string().green(),
            self.stats.rows
        )];

        if self.stats.malformed > 0 {
            lines.push(format!("   {} malformed rows skipped", self.stats.malformed).dimmed().to_string());
        }
        if self.stats.unknown_team > 0 {
            lines.push(
                format!("   {} games with unknown teams dropped", self.stats.unknown_team)
                    .yellow()
                    .to_string(),
            );
        }
        if !self.failed_months.is_empty() {
            let months: Vec<String> = self.failed_months.iter().map(|m| format!("{m:02}")).collect();
            lines.push(format!("   Failed months: {}", months.join(", ")).red().to_string());
        }

        lines.join("\n")
    }
}

impl Render for TeamSchedule {
    fn render(&self) -> String {
        let mut line = format!("📅 {} {}", self.team, format!("({} games)", self.lines.len()).dimmed());
        if self.skipped > 0 {
            line.push_str(&format!(" {}", format!("{} unreadable lines", self.skipped).yellow()));
        }
        line
    }
}

/// `   + path` line for a written file.
pub fn render_written(path: &Path) -> String {
    format!("   {} {}", "+".green(), path.display())
}
