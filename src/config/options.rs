// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Everything the dataset client needs, passed in explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Pins "this year" for window/fallback logic. `None` reads the local clock.
    pub current_year: Option<i32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            current_year: None,
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Self {
        let trimmed = url.as_ref().trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() { s!(DEFAULT_BASE_URL) } else { s!(trimmed) };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }
}
