//! URL helpers for the VisionCine catalog
//!
//! Path builders and the slug/image extraction rules that form the frozen
//! contract with the upstream site's markup.

use regex::Regex;

/// Origin of the upstream catalog site
pub const BASE_URL: &str = "https://www.visioncine-1.com.br";

/// Marker segment separating a watch link from its slug
pub const WATCH_MARKER: &str = "/watch/";

/// Listing page for movies
pub const MOVIES_PATH: &str = "/movies";

/// Listing page for TV series
pub const SERIES_PATH: &str = "/tvseries";

/// Listing page for animes
pub const ANIMES_PATH: &str = "/animes";

/// Builds the search path for a given query
///
/// URL encodes the query as the site's `search.php` expects.
///
/// # Example
/// ```
/// use visioncine_core::url::search_path;
/// assert_eq!(search_path("star wars"), "/search.php?q=star%20wars");
/// ```
pub fn search_path(query: &str) -> String {
    format!("/search.php?q={}", urlencoding::encode(query))
}

/// Builds the watch page path for a content slug
///
/// # Example
/// ```
/// use visioncine_core::url::watch_path;
/// assert_eq!(watch_path("oppenheimer"), "/watch/oppenheimer");
/// ```
pub fn watch_path(slug: &str) -> String {
    format!("{}{}", WATCH_MARKER, slug)
}

/// Prefixes a relative href with the catalog origin
///
/// Empty hrefs stay empty; the site always emits root-relative links, so
/// the prefix is applied unconditionally otherwise.
pub fn absolute_link(href: &str) -> String {
    if href.is_empty() {
        String::new()
    } else {
        format!("{}{}", BASE_URL, href)
    }
}

/// Extracts the content slug from a watch link
///
/// The slug is whatever follows the `/watch/` marker; links without the
/// marker yield `None`.
///
/// # Example
/// ```
/// use visioncine_core::url::extract_slug;
/// assert_eq!(extract_slug("/watch/oppenheimer"), Some("oppenheimer".to_string()));
/// assert_eq!(extract_slug("/movies"), None);
/// ```
pub fn extract_slug(link: &str) -> Option<String> {
    link.split_once(WATCH_MARKER)
        .map(|(_, slug)| slug.to_string())
        .filter(|slug| !slug.is_empty())
}

/// Extracts the image URL from an inline `background-image` declaration
///
/// Accepts a full `style` attribute value and strips the wrapping
/// `url('...')` syntax, with or without quotes.
pub fn background_image_url(style: &str) -> Option<String> {
    let re = Regex::new(r#"background-image\s*:\s*url\(\s*['"]?([^'")]+)['"]?\s*\)"#).ok()?;
    re.captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
