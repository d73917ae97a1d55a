//! HTTP client for the VisionCine catalog site
//!
//! Issues outbound page requests with a browser-like header set, replays
//! session cookies, and retries failed attempts with linear backoff.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap};

use crate::error::{Result, VisioncineError};
use crate::url::BASE_URL;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

/// Configuration for the HTTP client
///
/// Immutable once the client is built; the optional cookie header is
/// threaded through here instead of living in shared mutable state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the client fetches from (default: the live catalog site)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Total attempts per fetch (default: 3)
    pub max_retries: u32,
    /// Base backoff delay; attempt n waits `backoff_base × (n − 1)` (default: 2000 ms)
    pub backoff_base: Duration,
    /// Static cookie header sent with every request, when pre-supplied
    pub cookie_header: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
            backoff_base: Duration::from_millis(2000),
            cookie_header: None,
        }
    }
}

impl ClientConfig {
    /// Returns the same configuration with a pre-supplied session cookie
    pub fn with_cookie_header(mut self, cookie: impl Into<String>) -> Self {
        self.cookie_header = Some(cookie.into());
        self
    }
}

/// HTTP client wrapper for the catalog site
///
/// Handles all outbound traffic:
/// - Browser-impersonation headers (User-Agent, Accept-Language, Referer)
/// - Cookie replay: responses that set cookies have them applied to all
///   later requests of this client via the cookie store
/// - Bounded retry with linear backoff on any failed attempt
/// - 403 responses classified as a distinct blocked condition
pub struct VisioncineClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    backoff_base: Duration,
    cookie_header: Option<String>,
}

impl VisioncineClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(header::ACCEPT, ACCEPT.parse().unwrap());
                headers.insert(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE.parse().unwrap());
                headers.insert(header::CACHE_CONTROL, "max-age=0".parse().unwrap());
                headers.insert(header::CONNECTION, "keep-alive".parse().unwrap());
                headers.insert("Upgrade-Insecure-Requests", "1".parse().unwrap());
                headers.insert("Sec-Fetch-Dest", "document".parse().unwrap());
                headers.insert("Sec-Fetch-Mode", "navigate".parse().unwrap());
                headers.insert("Sec-Fetch-Site", "none".parse().unwrap());
                headers.insert("Sec-Fetch-User", "?1".parse().unwrap());
                headers
            })
            .build()
            .map_err(VisioncineError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            max_retries: config.max_retries,
            backoff_base: config.backoff_base,
            cookie_header: config.cookie_header,
        })
    }

    /// Origin this client fetches from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch HTML content from a path on the catalog site
    ///
    /// # Arguments
    /// * `path` - The path to fetch (e.g., "/search.php?q=matrix")
    ///
    /// # Errors
    /// - `Blocked` - upstream answered 403 after all attempts
    /// - `Status` - upstream answered another non-success status
    /// - `Http` - network or transport failure
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        self.fetch_with_retry(&url).await
    }

    /// Fetch HTML content from a full URL
    ///
    /// Used for player pages hosted outside the catalog origin. Same retry
    /// and classification behavior as [`fetch`](Self::fetch).
    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        self.fetch_with_retry(url).await
    }

    /// Internal fetch with linear-backoff retry
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 1u32;

        loop {
            match self.do_fetch(url).await {
                Ok(body) => {
                    tracing::debug!(%url, attempt, "fetch succeeded");
                    return Ok(body);
                }
                Err(e) => {
                    if attempt >= self.max_retries {
                        tracing::error!(%url, attempt, error = %e, "fetch failed, giving up");
                        return Err(e);
                    }
                    tracing::warn!(%url, attempt, error = %e, "fetch attempt failed, retrying");
                    // Linear backoff: 2s, 4s with the default base
                    tokio::time::sleep(self.backoff_base * attempt).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Perform a single fetch attempt
    async fn do_fetch(&self, url: &str) -> Result<String> {
        let mut request = self
            .client
            .get(url)
            .header(header::REFERER, self.base_url.as_str());

        if let Some(cookie) = &self.cookie_header {
            request = request.header(header::COOKIE, cookie.as_str());
        }

        let response = request.send().await.map_err(VisioncineError::Http)?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(VisioncineError::Blocked);
        }

        if !status.is_success() {
            return Err(VisioncineError::Status(status.as_u16()));
        }

        response.text().await.map_err(VisioncineError::Http)
    }
}
