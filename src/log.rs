// src/log.rs
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::config::consts::LOG_ENV;

/// Install the stderr subscriber. `ATP_STATS_LOG` wins over `verbosity`
/// (0 = warn, 1 = info, 2+ = debug).
pub fn init(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|env| EnvFilter::from_str(&env).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
