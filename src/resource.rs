// src/resource.rs
use std::fmt;

use crate::config::consts::{MATCHES_PREFIX, PLAYERS_FILE, RANKINGS_PREFIX};

/// A named remote CSV file in the dataset mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Players,
    Matches(i32),
    Rankings(i32),
}

impl Resource {
    pub fn file_name(&self) -> String {
        match self {
            Resource::Players => s!(PLAYERS_FILE),
            Resource::Matches(year) => format!("{MATCHES_PREFIX}{year}.csv"),
            Resource::Rankings(year) => format!("{RANKINGS_PREFIX}{year}.csv"),
        }
    }

    /// `base` is expected without a trailing slash (see `ApiConfig::base_url`).
    pub fn url(&self, base: &str) -> String {
        join!(base, "/", &self.file_name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Players => write!(f, "players"),
            Resource::Matches(y) => write!(f, "matches:{y}"),
            Resource::Rankings(y) => write!(f, "rankings:{y}"),
        }
    }
}
