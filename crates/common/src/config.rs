//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every field has a default:
//! the registry core has no external services, so a bare environment
//! must still produce a working server.

use serde::{Deserialize, Serialize};
use std::env;

/// Canonical listen port. The deployment recipes this replaced drifted
/// across 8080/8000/80; 8080 is the one the registry standardizes on.
pub const DEFAULT_PORT: u16 = 8080;

/// Default page size for artifact enumeration
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,

    /// Roadmap tracks reported by GET /tracks, purely informational
    pub planned_tracks: Vec<String>,

    /// Page size for artifact enumeration
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "depot=debug".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            planned_tracks: env::var("PLANNED_TRACKS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            rust_log: "depot=debug".to_string(),
            port: DEFAULT_PORT,
            planned_tracks: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
