//! HTTP access for generator exports.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::{ExtractError, Result};

/// User agent string for export requests.
const USER_AGENT_VALUE: &str = concat!(
    "ons-pipeline/",
    env!("CARGO_PKG_VERSION"),
    " (compatible; uk-cost-of-living-pipeline)"
);

/// Source of raw export bytes.
pub trait Fetcher {
    /// Returns the response body for `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher with a per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let network = |e: reqwest::Error| ExtractError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };
        debug!(url, "requesting export");
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(network)?;
        Ok(body.to_vec())
    }
}
