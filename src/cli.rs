// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    api::AtpApi,
    config::{consts::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TOP_LIMIT, REQUEST_TIMEOUT_SECS}, ApiConfig},
    core::Fetch,
    csv::Row,
    file::{self, ExportFormat, ExportOptions},
    players::{display_name, filter_players, ranking_of},
    progress::Progress,
    records::CATALOGUE,
};

#[derive(Debug, Parser)]
#[command(name = "atp_stats", version, about = "Browse ATP Open Era tennis statistics")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Dataset mirror base URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Treat this as the current year (stats window, top-players fallback)
    #[arg(long, global = true)]
    pub year: Option<i32>,

    #[arg(long, value_enum, default_value_t = Format::Csv, global = true)]
    pub format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, global = true)]
    pub out: Option<PathBuf>,

    /// Omit the header line in CSV/TSV output
    #[arg(long, global = true)]
    pub no_headers: bool,

    /// -v info, -vv debug (ATP_STATS_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// All players in the dataset
    Players {
        #[arg(long)]
        search: Option<String>,
    },
    /// One player's details and recent stats
    Player { id: String },
    /// Every match of one season
    Tournaments { year: i32 },
    /// Ranking file of one year
    Rankings { year: i32 },
    /// Wins, losses and titles over the last six seasons
    Stats { id: String },
    /// Top of the rankings, with fallbacks
    Top {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
        #[arg(long)]
        search: Option<String>,
    },
    /// Records catalogue
    Records,
}

impl GlobalArgs {
    pub fn api_config(&self) -> ApiConfig {
        let cfg = ApiConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        match self.year {
            Some(y) => cfg.with_current_year(y),
            None => cfg,
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            format: self.format.into(),
            include_headers: !self.no_headers,
            out: self.out.clone(),
        }
    }
}

/// Prints per-year progress of the stats fold to stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, year: i32, rows: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {year}: {rows} matches", self.done, self.total);
    }
    fn item_failed(&mut self, year: i32, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {year}: unavailable ({reason})", self.done, self.total);
    }
}

/// Parse args, set up logging, run one command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.global.verbose);

    let api = AtpApi::new(cli.global.api_config()).wrap_err("setting up the HTTP client")?;
    execute(&api, &cli.command, &cli.global.export_options()).await
}

pub async fn execute<F: Fetch>(api: &AtpApi<F>, command: &Command, export: &ExportOptions) -> Result<()> {
    match command {
        Command::Players { search } => {
            let rows = api.players().await;
            emit_rows(filter(rows, search.as_deref()), export)
        }
        Command::Player { id } => {
            let mut progress = StderrProgress { total: 0, done: 0 };
            let (player, stats) = tokio::join!(
                api.player_details(id),
                api.player_stats_with_progress(id, Some(&mut progress)),
            );
            let Some(player) = player else {
                eprintln!("Player not found");
                return Ok(());
            };
            eprintln!("{} ({})", display_name(&player), player.field("player_id"));
            emit_rows(vec![player_summary(&player, stats)], export)
        }
        Command::Tournaments { year } => emit_rows(api.tournaments(*year).await, export),
        Command::Rankings { year } => emit_rows(api.player_rankings(*year).await, export),
        Command::Stats { id } => {
            let mut progress = StderrProgress { total: 0, done: 0 };
            let stats = api.player_stats_with_progress(id, Some(&mut progress)).await;
            match export.format {
                ExportFormat::Json => emit_value(&stats, export),
                _ => emit_rows(
                    vec![Row::from_pairs([
                        ("player_id", id.clone()),
                        ("wins", stats.wins.to_string()),
                        ("losses", stats.losses.to_string()),
                        ("titles", stats.titles.to_string()),
                    ])],
                    export,
                ),
            }
        }
        Command::Top { limit, search } => {
            let rows = api.top_players(*limit).await;
            if rows.first().is_some_and(|r| ranking_of(r).is_none()) {
                eprintln!("No ranking data; listing players in dataset order");
            }
            emit_rows(filter(rows, search.as_deref()), export)
        }
        Command::Records => {
            let records = api.records().await;
            if export.format == ExportFormat::Json {
                return emit_value(&serde_json::json!({ "catalogue": CATALOGUE, "records": records }), export);
            }
            let rows: Vec<Row> = CATALOGUE
                .iter()
                .map(|c| Row::from_pairs([("title", c.title), ("description", c.description)]))
                .collect();
            emit_rows(rows, export)
        }
    }
}

fn filter(rows: Vec<Row>, search: Option<&str>) -> Vec<Row> {
    match search {
        Some(term) => filter_players(rows, term),
        None => rows,
    }
}

fn player_summary(player: &Row, stats: crate::stats::AggregateStats) -> Row {
    let or_na = |k: &str| {
        let v = player.field(k);
        if v.is_empty() { s!("N/A") } else { s!(v) }
    };
    let country = match player.field("country") {
        "" => or_na("ioc"),
        c => s!(c),
    };
    Row::from_pairs([
        ("player_id", s!(player.field("player_id"))),
        ("name", display_name(player)),
        ("birth_date", or_na("birth_date")),
        ("country", country),
        ("ht", or_na("ht")),
        ("wins", stats.wins.to_string()),
        ("losses", stats.losses.to_string()),
        ("titles", stats.titles.to_string()),
    ])
}

fn emit_rows(rows: Vec<Row>, export: &ExportOptions) -> Result<()> {
    if rows.is_empty() {
        eprintln!("No data available");
        return Ok(());
    }
    if let Some(path) = file::export_rows(&rows, export).wrap_err("writing output")? {
        eprintln!("Wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

fn emit_value<T: serde::Serialize>(value: &T, export: &ExportOptions) -> Result<()> {
    if let Some(path) = file::export_value(value, export).wrap_err("writing output")? {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
