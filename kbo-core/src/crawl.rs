//! Month-by-month collection of a season's schedule.

use std::future::Future;
use std::ops::RangeInclusive;

use crate::error::ScheduleResult;
use crate::normalize::{NormalizeStats, normalize_month};
use crate::protocol::RawRow;
use crate::roster::Roster;
use crate::store::ScheduleBook;

/// Where raw schedule rows come from (the league API in production).
pub trait ScheduleSource {
    fn fetch_month(
        &self,
        year: i32,
        month: u32,
    ) -> impl Future<Output = ScheduleResult<Vec<RawRow>>>;
}

/// Result of crawling a season.
#[derive(Debug)]
pub struct SeasonReport {
    pub book: ScheduleBook,
    pub stats: NormalizeStats,
    /// Months whose fetch or decode failed and contributed nothing.
    pub failed_months: Vec<u32>,
}

/// Fetch and normalize each month in order, one request at a time.
///
/// A month that fails to fetch or decode is logged and skipped; the
/// season continues with the next month.
pub async fn crawl_season<S: ScheduleSource>(
    source: &S,
    year: i32,
    months: RangeInclusive<u32>,
    roster: &Roster,
) -> SeasonReport {
    let mut report = SeasonReport {
        book: ScheduleBook::for_roster(roster),
        stats: NormalizeStats::default(),
        failed_months: Vec::new(),
    };

    for month in months {
        let rows = match source.fetch_month(year, month).await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("Skipping {year}.{month:02}: {e}");
                report.failed_months.push(month);
                continue;
            }
        };

        let batch = normalize_month(year, &rows, roster);
        log::info!(
            "{year}.{month:02}: {} games from {} rows ({} malformed, {} unknown team)",
            batch.stats.games,
            batch.stats.rows,
            batch.stats.malformed,
            batch.stats.unknown_team
        );

        for record in &batch.records {
            report.book.record(record);
        }
        report.stats.merge(batch.stats);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::normalize::tests::{continuation_row, date_row};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned months; months without an entry fail to decode.
    struct FakeSource {
        months: HashMap<u32, Vec<RawRow>>,
        calls: RefCell<Vec<u32>>,
    }

    impl ScheduleSource for FakeSource {
        async fn fetch_month(&self, year: i32, month: u32) -> ScheduleResult<Vec<RawRow>> {
            self.calls.borrow_mut().push(month);
            match month {
                5 => Err(ScheduleError::Fetch {
                    year,
                    month,
                    reason: "HTTP 500".into(),
                }),
                _ => self.months.get(&month).cloned().ok_or(ScheduleError::Decode {
                    year,
                    month,
                    reason: "expected value at line 1 column 1".into(),
                }),
            }
        }
    }

    fn fake() -> FakeSource {
        let mut months = HashMap::new();
        months.insert(
            3,
            vec![
                date_row("03.28(토)", "14:00", "KT", "LG", "잠실"),
                continuation_row("14:00", "한화", "SSG", "문학"),
            ],
        );
        months.insert(4, vec![date_row("04.01(수)", "18:30", "LG", "두산", "잠실")]);
        months.insert(6, vec![date_row("06.02(화)", "18:30", "NC", "롯데", "사직")]);
        FakeSource {
            months,
            calls: RefCell::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn failed_months_are_skipped_and_crawl_continues() {
        let source = fake();
        let report = crawl_season(&source, 2026, 3..=7, &Roster::default()).await;

        assert_eq!(*source.calls.borrow(), vec![3, 4, 5, 6, 7]);
        assert_eq!(report.failed_months, vec![5, 7]);
        assert_eq!(report.book.game_count(), 4);
        assert_eq!(report.stats.games, 4);
        assert_eq!(report.book.lines("LG").len(), 2);
        assert_eq!(report.book.lines("롯데").len(), 1);
    }

    #[tokio::test]
    async fn two_lines_per_game_and_none_for_unknown_teams() {
        let mut source = fake();
        source.months.insert(
            7,
            vec![date_row("07.10(금)", "18:30", "KT", "올스타", "대전")],
        );
        let report = crawl_season(&source, 2026, 3..=7, &Roster::default()).await;

        let lines: usize = report.book.teams().map(|(_, l)| l.len()).sum();
        assert_eq!(lines, 2 * report.stats.games);
        assert_eq!(report.stats.unknown_team, 1);
        assert!(report.book.lines("KT").iter().all(|l| l.opponent != "올스타"));
    }
}
