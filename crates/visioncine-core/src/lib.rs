//! VisionCine Scraper Core Library
//!
//! Async API for browsing the VisionCine streaming catalog: home listing,
//! search, per-kind listings, and slug-to-video resolution.
//!
//! # Overview
//!
//! This crate provides a complete scraping layer for the catalog site:
//! - HTTP client with browser-like headers, cookie replay, and a bounded
//!   retry loop with linear backoff
//! - HTML parsers mapping catalog markup to normalized records
//! - High-level API combining both
//!
//! # Example
//!
//! ```no_run
//! use visioncine_core::{Result, VisioncineScraper};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = VisioncineScraper::new()?;
//!
//!     // Browse the categorized front page
//!     for category in scraper.home().await? {
//!         println!("{} ({} items)", category.name, category.items.len());
//!     }
//!
//!     // Search, then resolve a result to its playback URLs
//!     let results = scraper.search("matrix").await?;
//!     if let Some(item) = results.first() {
//!         let resolution = scraper.resolve_video(&item.slug).await?;
//!         println!("player: {}", resolution.player_link);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Degradation contract
//!
//! The upstream markup structure is treated as a frozen external contract.
//! When the site omits an expected node, the affected field comes back as
//! an empty string and whole sections may be dropped from the home listing;
//! extraction itself never fails. Only fetch failures surface as errors.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, VisioncineClient};

// Re-export error types
pub use error::{BLOCKED_HINT, Result, VisioncineError};

// Re-export parser functions
pub use parser::{find_player_link, find_video_source, parse_home, parse_poster_grid};

// Re-export main scraper API
pub use scraper::VisioncineScraper;

// Re-export data types
pub use types::{CatalogItem, Category, VideoResolution};
