//! HTTP client creation and configuration utilities

use crate::config::Config;
use reqwest::blocking::Client;
use std::time::Duration;

/// Creates the blocking HTTP client used for every request of one [`EventorClient`].
///
/// No timeout is applied unless `http_timeout_seconds` is configured; a hung
/// request then blocks the caller.
///
/// [`EventorClient`]: super::EventorClient
pub fn create_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.http_timeout_seconds.map(Duration::from_secs))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}
