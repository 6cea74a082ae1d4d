// src/stats.rs
use std::ops::AddAssign;

use serde::Serialize;

use crate::config::consts::{FINAL_ROUND, STATS_WINDOW_YEARS};
use crate::csv::Row;
use crate::error::FetchError;

/// Win/loss/title counts for one player over the trailing year window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub wins: u32,
    pub losses: u32,
    pub titles: u32,
}

impl AggregateStats {
    /// Fold one match row into the tally for `player_id`.
    pub fn record(&mut self, row: &Row, player_id: &str) {
        let won = row.get("winner_id") == Some(player_id);
        if won {
            self.wins += 1;
            if row.field("round") == FINAL_ROUND {
                self.titles += 1;
            }
        }
        if row.get("loser_id") == Some(player_id) {
            self.losses += 1;
        }
    }
}

impl AddAssign for AggregateStats {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.losses += rhs.losses;
        self.titles += rhs.titles;
    }
}

/// Tally a batch of match rows for one player.
pub fn tally<'a>(rows: impl IntoIterator<Item = &'a Row>, player_id: &str) -> AggregateStats {
    let mut stats = AggregateStats::default();
    for row in rows {
        stats.record(row, player_id);
    }
    stats
}

/// Years covered by a stats query, most recent first.
pub fn window(current_year: i32) -> impl Iterator<Item = i32> {
    (current_year - (STATS_WINDOW_YEARS - 1)..=current_year).rev()
}

/// Stats plus the years that could not be retrieved.
#[derive(Debug)]
pub struct StatsReport {
    pub stats: AggregateStats,
    pub years: Vec<i32>,
    pub failed: Vec<(i32, FetchError)>,
}

impl StatsReport {
    /// Fold per-year outcomes; a failed year contributes nothing.
    pub fn fold<I>(player_id: &str, outcomes: I) -> Self
    where
        I: IntoIterator<Item = (i32, Result<Vec<Row>, FetchError>)>,
    {
        let mut report = StatsReport { stats: AggregateStats::default(), years: Vec::new(), failed: Vec::new() };
        for (year, outcome) in outcomes {
            report.years.push(year);
            match outcome {
                Ok(rows) => report.stats += tally(&rows, player_id),
                Err(e) => report.failed.push((year, e)),
            }
        }
        report
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
