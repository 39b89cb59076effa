use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_EXTRACTION_DELAY_MS: u64 = 3000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Redis connection string. When unset portfolios live in process memory.
    pub redis_url: Option<String>,
    /// Expiry applied to every stored portfolio. `None` keeps them forever.
    pub portfolio_ttl: Option<Duration>,
    /// Length of the simulated extraction pause.
    pub extraction_delay: Duration,
    pub max_upload_bytes: usize,
    pub max_photo_bytes: usize,
    /// Answer 404 for unknown ids instead of rendering the demo portfolio.
    pub strict_not_found: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            redis_url: None,
            portfolio_ttl: None,
            extraction_delay: Duration::from_millis(DEFAULT_EXTRACTION_DELAY_MS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            strict_not_found: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let ttl_secs: Option<u64> = parse_var(&lookup, "PORTFOLIO_TTL_SECS")?;

        Ok(Config {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            redis_url: lookup("REDIS_URL").filter(|url| !url.trim().is_empty()),
            portfolio_ttl: ttl_secs.filter(|&s| s > 0).map(Duration::from_secs),
            extraction_delay: parse_var(&lookup, "EXTRACTION_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.extraction_delay),
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
            max_photo_bytes: parse_var(&lookup, "MAX_PHOTO_BYTES")?
                .unwrap_or(defaults.max_photo_bytes),
            strict_not_found: parse_var(&lookup, "STRICT_NOT_FOUND")?
                .unwrap_or(defaults.strict_not_found),
        })
    }

    /// Largest request body the router accepts. Leaves room for multipart framing.
    pub fn body_limit(&self) -> usize {
        self.max_upload_bytes.max(self.max_photo_bytes) + 64 * 1024
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
    }
}
