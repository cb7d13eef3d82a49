use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{
    MetarError,
    query::{DEFAULT_BASE_URL, build_query_url_with_base},
};

use super::MetarProvider;

/// Provider backed by the aviationweather.gov data server.
#[derive(Debug, Clone)]
pub struct AviationWeatherProvider {
    base_url: String,
    http: Client,
}

impl AviationWeatherProvider {
    /// Provider for the public endpoint, without a request timeout.
    pub fn new() -> Result<Self, MetarError> {
        Self::with_options(DEFAULT_BASE_URL, None)
    }

    /// # Arguments
    ///
    /// * 'base_url' - data server endpoint, query string excluded
    /// * 'timeout' - whole-request timeout; `None` leaves the transport default
    pub fn with_options(base_url: &str, timeout: Option<Duration>) -> Result<Self, MetarError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { base_url: base_url.to_string(), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MetarProvider for AviationWeatherProvider {
    async fn fetch_raw(&self, stations: &[String]) -> Result<Vec<u8>, MetarError> {
        let url = build_query_url_with_base(&self.base_url, stations)?;
        log::debug!("GET {url}");

        let res = self.http.get(&url).send().await?;

        // The body is parsed whatever the status; an error page fails there.
        let status = res.status();
        if !status.is_success() {
            log::warn!("data server answered with status {status}");
        }

        let body = res.bytes().await?;
        log::debug!("read {} byte(s) from data server", body.len());

        Ok(body.to_vec())
    }
}
