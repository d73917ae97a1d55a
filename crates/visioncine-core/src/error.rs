//! Error types for the VisionCine scraper
//!
//! Provides a single error enum with human-readable messages and
//! JSON-friendly serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Advisory shown when the upstream site answers 403
pub const BLOCKED_HINT: &str =
    "The site blocked the request. Check whether authentication or anti-bot protection is required.";

/// Error type for all VisionCine scraper operations
#[derive(Error, Debug)]
pub enum VisioncineError {
    /// HTTP request failed (network, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered 403 — the site blocked the request
    #[error("Request blocked by upstream (HTTP 403)")]
    Blocked,

    /// Upstream answered a non-success status other than 403
    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Search query missing or empty
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Content slug missing or empty
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    /// Watch page carried no player link or embedded frame
    #[error("Player link not found")]
    PlayerNotFound(String),
}

impl VisioncineError {
    /// Upstream HTTP status associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            VisioncineError::Blocked => Some(403),
            VisioncineError::Status(code) => Some(*code),
            VisioncineError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Advisory hint string, populated only for blocked requests
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            VisioncineError::Blocked => Some(BLOCKED_HINT),
            _ => None,
        }
    }
}

impl Serialize for VisioncineError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for VisionCine operations
pub type Result<T> = std::result::Result<T, VisioncineError>;
