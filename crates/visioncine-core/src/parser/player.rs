//! Player page parsers
//!
//! Two-hop video resolution: the watch page carries a link to an external
//! player page, and the player page carries the actual media source. Each
//! hop is an ordered chain of fallible extractors, first match wins.

use scraper::{Html, Selector};

/// Extracts the player link from a watch page
///
/// Tries, in order:
/// 1. an anchor to the known external player host (`playcnvs.stream`)
/// 2. an anchor whose target contains the literal `ASSISTIR` marker
/// 3. the source of an embedded frame
///
/// Returns `None` when no candidate matches; callers decide whether that
/// is a hard failure.
pub fn find_player_link(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    if let Some(href) = first_attr(&document, r#"a[href*="playcnvs.stream"]"#, "href") {
        return Some(href);
    }
    if let Some(href) = first_attr(&document, r#"a[href*="ASSISTIR"]"#, "href") {
        return Some(href);
    }
    first_attr(&document, "iframe[src]", "src")
}

/// Extracts the direct media URL from a player page
///
/// Tries `video source`, then `video` itself, then an embedded frame.
pub fn find_video_source(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    if let Some(src) = first_attr(&document, "video source[src]", "src") {
        return Some(src);
    }
    if let Some(src) = first_attr(&document, "video[src]", "src") {
        return Some(src);
    }
    first_attr(&document, "iframe[src]", "src")
}

/// First non-empty attribute value of the first element matching `selector`
fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
