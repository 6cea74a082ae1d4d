// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/JeffSackmann/tennis_atp/master";
pub const BASE_URL_ENV: &str = "ATP_API_BASE";
pub const USER_AGENT: &str = concat!("atp_stats/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Resource file names
pub const PLAYERS_FILE: &str = "atp_players.csv";
pub const MATCHES_PREFIX: &str = "atp_matches_";
pub const RANKINGS_PREFIX: &str = "atp_rankings_";

// Queries
pub const STATS_WINDOW_YEARS: i32 = 6; // current year + 5 back
pub const DEFAULT_TOP_LIMIT: usize = 100;
pub const FINAL_ROUND: &str = "F";

// Logging
pub const LOG_ENV: &str = "ATP_STATS_LOG";
