//! HTTP client for kino.mail.ru
//!
//! This module provides a throttled HTTP client that spaces requests with a
//! fixed delay and sends a fixed browser-like header set. There is no retry
//! logic: a failed fetch is reported to the caller, who treats it as the end
//! of pagination.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::error::Result;

/// Base URL for kino.mail.ru
const KINO_BASE_URL: &str = "https://kino.mail.ru";

/// User-Agent mimicking a desktop browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Accept header for HTML listing pages
const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Accept-Language header for Russian content
const DEFAULT_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7";

/// Configuration for the kino.mail.ru HTTP client
///
/// All previously ambient values (base URL, delay, timeout) live here and
/// are passed in at construction.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Base URL of the site (default: `https://kino.mail.ru`)
    pub base_url: String,
    /// Fixed delay slept before every request (default: 2 s)
    pub request_delay: Duration,
    /// Per-request timeout in seconds (default: 15)
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: KINO_BASE_URL.to_string(),
            request_delay: Duration::from_secs(2),
            timeout_secs: 15,
        }
    }
}

/// HTTP client for kino.mail.ru with fixed-rate throttling
///
/// Each `fetch` sleeps the configured delay first, so consecutive requests
/// are spaced at least that far apart on the single task driving the
/// collection loop. No adaptive backoff and no retries.
pub struct KinoClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Client configuration
    config: ScraperConfig,
}

impl KinoClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(reqwest::header::ACCEPT, DEFAULT_ACCEPT.parse().unwrap());
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    DEFAULT_ACCEPT_LANGUAGE.parse().unwrap(),
                );
                headers.insert(
                    reqwest::header::REFERER,
                    config.base_url.parse().unwrap_or_else(|_| {
                        KINO_BASE_URL.parse().unwrap()
                    }),
                );
                headers.insert(reqwest::header::DNT, "1".parse().unwrap());
                headers
            })
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch HTML content from a kino.mail.ru path.
    ///
    /// Sleeps the configured delay, then issues a single GET. Any transport
    /// error, timeout, or non-success status is returned as an error; there
    /// are no retries.
    ///
    /// # Arguments
    /// * `path` - Relative path on the site (e.g., "/cinema/top/?page=2")
    ///
    /// # Returns
    /// The HTML content as a string
    pub async fn fetch(&self, path: &str) -> Result<String> {
        sleep(self.config.request_delay).await;

        let url = format!("{}{}", self.config.base_url, path);
        debug!(url = %url, "fetching page");

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }

    /// Get the configured request delay (for testing)
    #[cfg(test)]
    pub fn request_delay(&self) -> Duration {
        self.config.request_delay
    }
}
