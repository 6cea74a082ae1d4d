// src/api.rs
//! # Dataset access façade
//!
//! High-level queries over the remote ATP CSV files. Every query re-fetches
//! what it needs; nothing is cached between calls.
//!
//! Each soft query (`players`, `player_stats`, ...) never fails: retrieval
//! errors are logged and replaced by the query's empty value, so callers see
//! "no data" either way. The `try_*` twins keep the error for callers that
//! need to tell the two apart.
//!
//! ```text
//! caller → AtpApi::<query> → Fetch::fetch_text(resource) → csv::decode
//!                         ↘ fold / fallback / lookup
//! ```

use std::time::Instant;

use chrono::Datelike;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::config::consts::DEFAULT_TOP_LIMIT;
use crate::core::{Fetch, HttpFetcher};
use crate::csv::{self, Row};
use crate::error::FetchError;
use crate::progress::Progress;
use crate::records::Records;
use crate::resource::Resource;
use crate::stats::{self, AggregateStats, StatsReport};

/// Which tier of the top-players fallback chain produced the rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopSource {
    Rankings(i32),
    Players,
}

#[derive(Debug)]
pub struct TopPlayers {
    pub source: TopSource,
    pub rows: Vec<Row>,
}

pub struct AtpApi<F = HttpFetcher> {
    fetcher: F,
    config: ApiConfig,
}

impl AtpApi<HttpFetcher> {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: Fetch> AtpApi<F> {
    pub fn with_fetcher(fetcher: F, config: ApiConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn current_year(&self) -> i32 {
        self.config
            .current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /* ---------------- Raw resource access ---------------- */

    /// Fetch one resource and decode it.
    pub async fn load(&self, resource: Resource) -> Result<Vec<Row>, FetchError> {
        let text = self.fetcher.fetch_text(resource).await?;
        let t = Instant::now();
        let rows = csv::decode(&text);
        debug!(%resource, rows = rows.len(), elapsed = ?t.elapsed(), "decoded");
        Ok(rows)
    }

    async fn load_soft(&self, resource: Resource, op: &str) -> Vec<Row> {
        self.load(resource).await.unwrap_or_else(|e| {
            warn!(op, %resource, error = %e, "retrieval failed; returning no rows");
            Vec::new()
        })
    }

    /* ---------------- Players ---------------- */

    pub async fn try_players(&self) -> Result<Vec<Row>, FetchError> {
        self.load(Resource::Players).await
    }

    pub async fn players(&self) -> Vec<Row> {
        self.load_soft(Resource::Players, "players").await
    }

    /// First row whose `player_id` equals `player_id`, or `None`.
    pub async fn try_player_details(&self, player_id: &str) -> Result<Option<Row>, FetchError> {
        let players = self.try_players().await?;
        Ok(find_player(players, player_id))
    }

    pub async fn player_details(&self, player_id: &str) -> Option<Row> {
        find_player(self.players().await, player_id)
    }

    /* ---------------- Per-year files ---------------- */

    pub async fn try_tournaments(&self, year: i32) -> Result<Vec<Row>, FetchError> {
        self.load(Resource::Matches(year)).await
    }

    pub async fn tournaments(&self, year: i32) -> Vec<Row> {
        self.load_soft(Resource::Matches(year), "tournaments").await
    }

    pub async fn try_player_rankings(&self, year: i32) -> Result<Vec<Row>, FetchError> {
        self.load(Resource::Rankings(year)).await
    }

    pub async fn player_rankings(&self, year: i32) -> Vec<Row> {
        self.load_soft(Resource::Rankings(year), "player_rankings").await
    }

    /* ---------------- Stats ---------------- */

    /// Fetch each year of the window in turn (newest first) and fold.
    pub async fn player_stats_report(
        &self,
        player_id: &str,
        mut progress: Option<&mut dyn Progress>,
    ) -> StatsReport {
        let years: Vec<i32> = stats::window(self.current_year()).collect();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(years.len());
        }

        let mut outcomes = Vec::with_capacity(years.len());
        for year in years {
            let outcome = self.try_tournaments(year).await;
            if let Some(p) = progress.as_deref_mut() {
                match &outcome {
                    Ok(rows) => p.item_done(year, rows.len()),
                    Err(e) => p.item_failed(year, &e.to_string()),
                }
            }
            outcomes.push((year, outcome));
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        StatsReport::fold(player_id, outcomes)
    }

    pub async fn player_stats_with_progress(
        &self,
        player_id: &str,
        progress: Option<&mut dyn Progress>,
    ) -> AggregateStats {
        let report = self.player_stats_report(player_id, progress).await;
        for (year, e) in &report.failed {
            warn!(op = "player_stats", year, error = %e, "year skipped");
        }
        report.stats
    }

    pub async fn player_stats(&self, player_id: &str) -> AggregateStats {
        self.player_stats_with_progress(player_id, None).await
    }

    /* ---------------- Top players ---------------- */

    /// Rankings for this year, else last year, else the raw players file;
    /// the first `limit` rows of whichever answered. Only the players file
    /// failing is an error; an empty or failed rankings year just falls through.
    pub async fn try_top_players(&self, limit: usize) -> Result<TopPlayers, FetchError> {
        let year = self.current_year();

        for y in [year, year - 1] {
            let rows = self.player_rankings(y).await;
            if !rows.is_empty() {
                return Ok(TopPlayers { source: TopSource::Rankings(y), rows: truncate(rows, limit) });
            }
            info!(year = y, "no rankings rows; falling back");
        }

        info!("using players file for top players");
        let rows = self.try_players().await?;
        Ok(TopPlayers { source: TopSource::Players, rows: truncate(rows, limit) })
    }

    pub async fn top_players(&self, limit: usize) -> Vec<Row> {
        match self.try_top_players(limit).await {
            Ok(top) => top.rows,
            Err(e) => {
                warn!(op = "top_players", error = %e, "all sources failed; returning no rows");
                Vec::new()
            }
        }
    }

    pub async fn top_players_default(&self) -> Vec<Row> {
        self.top_players(DEFAULT_TOP_LIMIT).await
    }

    /* ---------------- Records ---------------- */

    /// Placeholder: touches the players file, computes nothing.
    pub async fn try_records(&self) -> Result<Records, FetchError> {
        let players = self.try_players().await?;
        debug!(players = players.len(), "records not computed");
        Ok(Records::default())
    }

    pub async fn records(&self) -> Records {
        self.try_records().await.unwrap_or_else(|e| {
            warn!(op = "records", error = %e, "retrieval failed");
            Records::default()
        })
    }
}

fn find_player(players: Vec<Row>, player_id: &str) -> Option<Row> {
    players.into_iter().find(|p| p.get("player_id") == Some(player_id))
}

fn truncate(mut rows: Vec<Row>, limit: usize) -> Vec<Row> {
    rows.truncate(limit);
    rows
}
