//! Catalog item parser
//!
//! Maps one poster fragment to a [`CatalogItem`] and walks listing pages.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, VisioncineError};
use crate::types::CatalogItem;
use crate::url::{absolute_link, background_image_url, extract_slug};

/// Positional tag labels from a poster's `.tags` block
///
/// The site conveys duration, year and rating purely by position. The
/// contract is index-based: if the page omits or reorders tags, the fields
/// misalign silently. Keeping the indexing behind these accessors makes
/// that ambiguity visible instead of scattering `tags[n]` around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterTags {
    labels: Vec<String>,
}

impl PosterTags {
    const IMDB_PREFIX: &'static str = "IMDb";

    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// tag[0]: runtime label, empty when absent
    pub fn duration(&self) -> String {
        self.label(0)
    }

    /// tag[1]: release year label, empty when absent
    pub fn year(&self) -> String {
        self.label(1)
    }

    /// tag[2]: rating label with the literal "IMDb" prefix stripped
    pub fn imdb(&self) -> String {
        let raw = self.label(2);
        raw.replace(Self::IMDB_PREFIX, "").trim().to_string()
    }

    fn label(&self, index: usize) -> String {
        self.labels.get(index).cloned().unwrap_or_default()
    }
}

/// Parses a single poster fragment into a [`CatalogItem`]
///
/// Absent nodes produce empty fields, never an error: extraction degrades
/// silently when the upstream markup drifts.
pub fn parse_catalog_item(element: &ElementRef) -> CatalogItem {
    let title = Selector::parse(".info h6")
        .ok()
        .and_then(|sel| element.select(&sel).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let image = Selector::parse(".content")
        .ok()
        .and_then(|sel| element.select(&sel).next())
        .and_then(|el| el.value().attr("style"))
        .and_then(background_image_url)
        .unwrap_or_default();

    let tags = PosterTags::new(collect_tag_labels(element));

    let href = Selector::parse(r#".info a[href*="/watch/"]"#)
        .ok()
        .and_then(|sel| element.select(&sel).next())
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default();

    CatalogItem {
        title,
        image,
        duration: tags.duration(),
        year: tags.year(),
        imdb: tags.imdb(),
        link: absolute_link(href),
        slug: extract_slug(href).unwrap_or_default(),
    }
}

/// Parses a listing page (movies/series/animes/search results)
///
/// Iterates the `.item.poster` nodes directly; no grouping.
///
/// # Errors
/// Returns `Parse` if the selector fails to compile
pub fn parse_poster_grid(html: &str) -> Result<Vec<CatalogItem>> {
    let document = Html::parse_document(html);

    let selector = Selector::parse(".item.poster")
        .map_err(|e| VisioncineError::Parse(format!("Invalid selector: {:?}", e)))?;

    Ok(document
        .select(&selector)
        .map(|element| parse_catalog_item(&element))
        .collect())
}

fn collect_tag_labels(element: &ElementRef) -> Vec<String> {
    let Ok(selector) = Selector::parse(".info .tags span") else {
        return Vec::new();
    };

    element
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}
