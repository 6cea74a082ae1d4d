// src/lib.rs

#[macro_use]
pub mod macros;

pub mod api;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod players;
pub mod progress;
pub mod records;
pub mod resource;
pub mod stats;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use api::{AtpApi, TopPlayers, TopSource};
pub use config::ApiConfig;
pub use crate::core::{Fetch, HttpFetcher};
pub use csv::{decode, Row};
pub use error::FetchError;
pub use resource::Resource;
pub use stats::{AggregateStats, StatsReport};
