//! Main scraper API for the VisionCine catalog
//!
//! Provides the high-level API combining the HTTP client and parsers.

use crate::client::{ClientConfig, VisioncineClient};
use crate::error::{Result, VisioncineError};
use crate::parser::{find_player_link, find_video_source, parse_home, parse_poster_grid};
use crate::types::{CatalogItem, Category, VideoResolution};
use crate::url::{ANIMES_PATH, MOVIES_PATH, SERIES_PATH, search_path, watch_path};

/// High-level scraper for the VisionCine catalog
///
/// Combines the retrying HTTP client with the HTML parsers to expose the
/// catalog as plain data: home listing, search, per-kind listings, and
/// slug-to-video resolution.
pub struct VisioncineScraper {
    client: VisioncineClient,
}

impl VisioncineScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = VisioncineClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = VisioncineClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Origin the underlying client fetches from
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch the front page and extract its categorized listing
    ///
    /// Sections without a heading or without items are dropped by the
    /// parser, so the result may be shorter than the page's section count.
    ///
    /// # Errors
    /// - `Blocked` / `Status` / `Http` if the page fetch fails
    /// - `Parse` if HTML parsing fails
    pub async fn home(&self) -> Result<Vec<Category>> {
        let html = self.client.fetch("/").await?;
        parse_home(&html)
    }

    /// Search the catalog
    ///
    /// # Arguments
    /// * `query` - Search query string
    ///
    /// # Returns
    /// Matching catalog items, empty if nothing matched
    ///
    /// # Errors
    /// - `InvalidQuery` if the query is empty or whitespace only; no
    ///   outbound request is made in that case
    /// - `Blocked` / `Status` / `Http` if the page fetch fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> visioncine_core::Result<()> {
    /// use visioncine_core::VisioncineScraper;
    /// let scraper = VisioncineScraper::new()?;
    /// let results = scraper.search("matrix").await?;
    /// for item in results {
    ///     println!("{}: {}", item.title, item.link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogItem>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(VisioncineError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let html = self.client.fetch(&search_path(trimmed)).await?;
        parse_poster_grid(&html)
    }

    /// Fetch the movies listing
    pub async fn movies(&self) -> Result<Vec<CatalogItem>> {
        let html = self.client.fetch(MOVIES_PATH).await?;
        parse_poster_grid(&html)
    }

    /// Fetch the TV series listing
    pub async fn series(&self) -> Result<Vec<CatalogItem>> {
        let html = self.client.fetch(SERIES_PATH).await?;
        parse_poster_grid(&html)
    }

    /// Fetch the animes listing
    pub async fn animes(&self) -> Result<Vec<CatalogItem>> {
        let html = self.client.fetch(ANIMES_PATH).await?;
        parse_poster_grid(&html)
    }

    /// Probe connectivity to the catalog origin
    ///
    /// Fetches the front page and discards the body. Useful as a
    /// connectivity check without committing to any extraction.
    ///
    /// # Errors
    /// - `Blocked` / `Status` / `Http` if the fetch fails
    pub async fn probe(&self) -> Result<()> {
        self.client.fetch("/").await.map(|_| ())
    }

    /// Resolve a content slug to its player link and media URL
    ///
    /// Two-hop lookup: the watch page yields the player link; the player
    /// page behind it yields the media URL. The first hop is mandatory —
    /// a watch page without any player candidate is `PlayerNotFound`. The
    /// second hop is best-effort: fetch or extraction failures leave
    /// `video_url` as `None` instead of failing the call.
    ///
    /// # Arguments
    /// * `slug` - Content identifier from a catalog item
    ///
    /// # Errors
    /// - `InvalidSlug` if the slug is empty or whitespace only
    /// - `PlayerNotFound` if the watch page has no player link
    /// - `Blocked` / `Status` / `Http` if the watch page fetch fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> visioncine_core::Result<()> {
    /// use visioncine_core::VisioncineScraper;
    /// let scraper = VisioncineScraper::new()?;
    /// let resolution = scraper.resolve_video("oppenheimer").await?;
    /// println!("player: {}", resolution.player_link);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_video(&self, slug: &str) -> Result<VideoResolution> {
        let trimmed = slug.trim();
        if trimmed.is_empty() {
            return Err(VisioncineError::InvalidSlug(
                "Slug cannot be empty".to_string(),
            ));
        }

        let watch_html = self.client.fetch(&watch_path(trimmed)).await?;

        let player_link = find_player_link(&watch_html)
            .ok_or_else(|| VisioncineError::PlayerNotFound(trimmed.to_string()))?;

        let video_url = match self.client.fetch_url(&player_link).await {
            Ok(player_html) => find_video_source(&player_html),
            Err(e) => {
                tracing::warn!(slug = trimmed, error = %e, "player page not reachable");
                None
            }
        };

        Ok(VideoResolution {
            player_link,
            video_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_creation() {
        let scraper = VisioncineScraper::new();
        assert!(scraper.is_ok());
    }

    #[test]
    fn test_scraper_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://localhost:9000".to_string(),
            ..ClientConfig::default()
        };
        let scraper = VisioncineScraper::with_config(config).unwrap();
        assert_eq!(scraper.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let scraper = VisioncineScraper::new().unwrap();
        let result = scraper.search("").await;
        match result {
            Err(VisioncineError::InvalidQuery(msg)) => {
                assert!(msg.contains("empty"));
            }
            _ => panic!("Expected InvalidQuery error"),
        }
    }

    #[tokio::test]
    async fn test_search_whitespace_query() {
        let scraper = VisioncineScraper::new().unwrap();
        let result = scraper.search("   ").await;
        match result {
            Err(VisioncineError::InvalidQuery(_)) => {}
            _ => panic!("Expected InvalidQuery error"),
        }
    }

    #[tokio::test]
    async fn test_resolve_video_empty_slug() {
        let scraper = VisioncineScraper::new().unwrap();
        let result = scraper.resolve_video("").await;
        match result {
            Err(VisioncineError::InvalidSlug(msg)) => {
                assert!(msg.contains("empty"));
            }
            _ => panic!("Expected InvalidSlug error"),
        }
    }

    #[tokio::test]
    async fn test_resolve_video_whitespace_slug() {
        let scraper = VisioncineScraper::new().unwrap();
        let result = scraper.resolve_video("   ").await;
        match result {
            Err(VisioncineError::InvalidSlug(_)) => {}
            _ => panic!("Expected InvalidSlug error"),
        }
    }
}
