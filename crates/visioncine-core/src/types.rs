//! Core data types for the VisionCine scraper
//!
//! Contains the records produced by extraction and returned by the API.

use serde::{Deserialize, Serialize};

/// One piece of media content extracted from a catalog page
///
/// Every field defaults to an empty string when the source markup is
/// missing the expected node; extraction never fails on absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Content title (e.g., "Oppenheimer")
    pub title: String,

    /// Poster image URL, taken from a CSS background-image declaration
    pub image: String,

    /// First positional tag label, by contract the runtime (e.g., "180 min")
    pub duration: String,

    /// Second positional tag label, by contract the release year
    pub year: String,

    /// Third positional tag label with the "IMDb" prefix stripped
    pub imdb: String,

    /// Absolute URL of the content's watch page
    pub link: String,

    /// Identifier substring of `link` following the /watch/ marker
    pub slug: String,
}

/// A named group of catalog items from the front page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Section heading text (e.g., "Lançamentos")
    pub name: String,

    /// Items listed under the section
    pub items: Vec<CatalogItem>,
}

/// Result of resolving a content slug to playback URLs
///
/// `player_link` comes from the watch page; `video_url` from the player
/// page behind it and is `None` whenever that second hop fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResolution {
    /// URL of the external player page found on the watch page
    pub player_link: String,

    /// Direct media URL extracted from the player page, if reachable
    pub video_url: Option<String>,
}
