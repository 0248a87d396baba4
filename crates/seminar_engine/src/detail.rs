use engine_logging::{engine_debug, engine_trace};
use scraper::Html;
use seminar_core::{DeliveryMode, SeminarDetail};

use crate::links::links_within;
use crate::patterns::{classify_delivery_mode, extract_registered_count};
use crate::selectors::DESCRIPTION_BLOCKS;
use crate::text::{page_text, visible_text};

/// Parses a seminar detail page. Never fails; every field has a fallback.
///
/// - `description`: first non-empty description block, else the page text.
/// - `delivery_mode`: classified from the description only.
/// - `registered_count`: searched in the whole page text.
/// - `links`: every anchor with a non-empty href, in document order.
pub fn parse_detail(html: &str) -> SeminarDetail {
    let document = Html::parse_document(html);
    let page = page_text(&document);

    let description = description_block(&document).unwrap_or_else(|| {
        engine_debug!("detail: no description block, using full page text");
        page.clone()
    });

    let delivery_mode = classify_delivery_mode(&description);
    if delivery_mode == DeliveryMode::Unknown {
        engine_debug!("detail: no delivery mode cue in description");
    }

    let registered_count = extract_registered_count(&page);
    let links = links_within(document.root_element(), None);
    engine_trace!(
        "detail: mode={} registered={:?} links={}",
        delivery_mode,
        registered_count,
        links.len()
    );

    SeminarDetail {
        description,
        delivery_mode,
        registered_count,
        links,
    }
}

fn description_block(document: &Html) -> Option<String> {
    DESCRIPTION_BLOCKS.iter().find_map(|selector| {
        document
            .select(selector)
            .next()
            .map(visible_text)
            .filter(|text| !text.is_empty())
    })
}
