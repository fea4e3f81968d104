//! Application configuration constants.
//!
//! Centralizes scheduler tuning values and server settings so no component
//! hardcodes its own copy.

use serde::Deserialize;
use std::path::Path;

// ==================== Server Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    server: Option<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    port: Option<u16>,
}

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Load server port with priority: config.toml > PORT env > default
pub fn load_server_port() -> u16 {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    load_server_port_from(Path::new("config.toml"))
}

fn load_server_port_from(path: &Path) -> u16 {
    if let Ok(contents) = std::fs::read_to_string(path) {
        if let Some(port) = port_from_toml(&contents) {
            tracing::info!("Using port from {}: {}", path.display(), port);
            return port;
        }
    }

    if let Ok(port) = std::env::var("PORT") {
        if let Ok(port) = port.parse::<u16>() {
            tracing::info!("Using port from PORT env: {}", port);
            return port;
        }
    }

    DEFAULT_PORT
}

fn port_from_toml(contents: &str) -> Option<u16> {
    let config: AppConfig = toml::from_str(contents).ok()?;
    config.server?.port
}

/// Get the full server bind address
pub fn server_bind_addr(port: u16) -> String {
    format!("{}:{}", SERVER_ADDR, port)
}

// ==================== Recommender Configuration ====================

/// Number of most recent reviews considered by the recommender
pub const RECENT_REVIEW_WINDOW: usize = 5;

/// Success rate at or above which the interval is promoted one rung
pub const PROMOTE_THRESHOLD: f64 = 0.9;

/// Success rate at or above which the interval is held; below it, demoted
pub const HOLD_THRESHOLD: f64 = 0.7;

/// Difficulty recorded when the caller does not supply one
pub const DEFAULT_DIFFICULTY: f64 = 0.5;

// ==================== Statistics Configuration ====================

/// Freshness window for the cached stats snapshot, in seconds
pub const STATS_CACHE_TTL_SECS: i64 = 300;

/// Length of the trailing daily-activity series, in days
pub const DAILY_STATS_DAYS: usize = 30;

/// Review count from which a phrase counts as learned
pub const LEARNED_REVIEW_COUNT: usize = 3;
