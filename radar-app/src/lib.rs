//! Shared setup for the AgentRadar binaries

use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging from `RUST_LOG`, defaulting to `info`
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Directory the output documents are written to
///
/// `RADAR_DATA_DIR` overrides the default `data` directory.
pub fn data_dir() -> PathBuf {
    std::env::var("RADAR_DATA_DIR")
        .unwrap_or_else(|_| "data".to_string())
        .into()
}

/// File-name slug for a player ("Abde Ezzalzouli" -> "abde-ezzalzouli")
pub fn player_slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
