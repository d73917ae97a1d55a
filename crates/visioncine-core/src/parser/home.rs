//! Front-page parser
//!
//! Extracts the home listing as an ordered sequence of named categories.

use scraper::{Html, Selector};

use crate::error::{Result, VisioncineError};
use crate::parser::item::parse_catalog_item;
use crate::types::Category;

/// Parses the front page into named categories
///
/// Each `.front` section contributes one category: the `h5` heading is the
/// name, the `.swiper-slide.item` nodes the items. Sections with an empty
/// heading or no items are dropped silently, not reported.
///
/// # Errors
/// Returns `Parse` if a selector fails to compile
pub fn parse_home(html: &str) -> Result<Vec<Category>> {
    let document = Html::parse_document(html);

    let section_selector = Selector::parse(".front")
        .map_err(|e| VisioncineError::Parse(format!("Invalid selector: {:?}", e)))?;
    let heading_selector = Selector::parse("h5")
        .map_err(|e| VisioncineError::Parse(format!("Invalid selector: {:?}", e)))?;
    let slide_selector = Selector::parse(".swiper-slide.item")
        .map_err(|e| VisioncineError::Parse(format!("Invalid selector: {:?}", e)))?;

    let mut categories = Vec::new();

    for section in document.select(&section_selector) {
        let name = section
            .select(&heading_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let items: Vec<_> = section
            .select(&slide_selector)
            .map(|element| parse_catalog_item(&element))
            .collect();

        if !name.is_empty() && !items.is_empty() {
            categories.push(Category { name, items });
        }
    }

    Ok(categories)
}
