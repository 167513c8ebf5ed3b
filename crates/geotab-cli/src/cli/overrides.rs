//! Command-line overrides for config values.

use clap::Args;
use geotab_core::config::{BatchConfig, GeotabConfig, RetryConfig};

#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Seconds to wait after every row.
    #[arg(long, value_name = "SECS")]
    pub delay: Option<f64>,
    /// Lookups per address before giving up on timeouts.
    #[arg(long, value_name = "N")]
    pub retries: Option<u32>,
    /// Seconds to wait after a timed-out lookup.
    #[arg(long, value_name = "SECS")]
    pub retry_delay: Option<f64>,
    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,
    /// User agent identifying this client to the geocoding service.
    #[arg(long, value_name = "NAME")]
    pub user_agent: Option<String>,
    /// Nominatim-compatible search endpoint.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Overrides {
    pub fn apply(&self, cfg: &mut GeotabConfig) {
        if let Some(delay) = self.delay {
            cfg.batch
                .get_or_insert_with(BatchConfig::default)
                .inter_request_delay_secs = delay;
        }
        if let Some(retries) = self.retries {
            cfg.retry.get_or_insert_with(RetryConfig::default).max_attempts = retries;
        }
        if let Some(retry_delay) = self.retry_delay {
            cfg.retry
                .get_or_insert_with(RetryConfig::default)
                .retry_delay_secs = retry_delay;
        }
        if let Some(timeout) = self.timeout {
            cfg.geocoder.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            cfg.geocoder.user_agent = user_agent.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            cfg.geocoder.endpoint = endpoint.clone();
        }
    }
}
