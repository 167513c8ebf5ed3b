use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Geocoding service parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    /// Nominatim-compatible search endpoint.
    pub endpoint: String,
    /// User agent sent with every request; Nominatim requires one that identifies the client.
    pub user_agent: String,
    /// Per-request timeout in seconds (e.g. 0.5 = 500ms).
    pub timeout_secs: f64,
    /// Country appended as the last segment of every composite address.
    pub country: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "geotab".to_string(),
            timeout_secs: 10.0,
            country: "USA".to_string(),
        }
    }
}

impl GeocoderConfig {
    pub fn timeout(&self) -> Result<Duration> {
        secs_to_duration(self.timeout_secs, "geocoder.timeout_secs")
    }
}

/// Retry parameters for timed-out lookups (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of lookups per address (including the first).
    pub max_attempts: u32,
    /// Pause in seconds after each timed-out lookup.
    pub retry_delay_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay_secs: 1.0,
        }
    }
}

/// Batch pacing (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pause in seconds after every row, whatever its outcome.
    pub inter_request_delay_secs: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            inter_request_delay_secs: 1.0,
        }
    }
}

/// Column names of the input and output tables (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    pub address: String,
    pub city: String,
    pub state: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            address: "address".to_string(),
            city: "city".to_string(),
            state: "state".to_string(),
            latitude: "latitude".to_string(),
            longitude: "longitude".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/geotab/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeotabConfig {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    /// Optional batch pacing; if missing, one second between rows.
    #[serde(default)]
    pub batch: Option<BatchConfig>,
    /// Optional column mapping; if missing, `address`/`city`/`state` in and `latitude`/`longitude` out.
    #[serde(default)]
    pub columns: Option<ColumnsConfig>,
}

impl GeotabConfig {
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        let retry = self.retry.clone().unwrap_or_default();
        Ok(RetryPolicy {
            max_attempts: retry.max_attempts,
            retry_delay: secs_to_duration(retry.retry_delay_secs, "retry.retry_delay_secs")?,
        })
    }

    pub fn inter_request_delay(&self) -> Result<Duration> {
        let batch = self.batch.clone().unwrap_or_default();
        secs_to_duration(batch.inter_request_delay_secs, "batch.inter_request_delay_secs")
    }

    pub fn columns(&self) -> ColumnsConfig {
        self.columns.clone().unwrap_or_default()
    }
}

fn secs_to_duration(secs: f64, key: &str) -> Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("{key} must be a non-negative number of seconds, got {secs}"))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("geotab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GeotabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GeotabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<GeotabConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: GeotabConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
