use std::path::PathBuf;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Root directory for stored resume records and match results.
    pub data_dir: PathBuf,
    /// Minimum match percentage for a resume to be marked suitable.
    pub suitability_threshold: u8,
    /// Upper bound on ranked keyphrases returned per analysis.
    pub max_ranked_phrases: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            rust_log: "info".to_string(),
            data_dir: PathBuf::from("data"),
            suitability_threshold: 70,
            max_ranked_phrases: 20,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let suitability_threshold = parse_env("SUITABILITY_THRESHOLD", defaults.suitability_threshold)?;
        ensure!(
            suitability_threshold <= 100,
            "SUITABILITY_THRESHOLD must be between 0 and 100, got {suitability_threshold}"
        );

        let max_ranked_phrases = parse_env("MAX_RANKED_PHRASES", defaults.max_ranked_phrases)?;
        ensure!(max_ranked_phrases >= 1, "MAX_RANKED_PHRASES must be at least 1");

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            suitability_threshold,
            max_ranked_phrases,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
