use scraper::ElementRef;
use seminar_core::Link;

use crate::selectors::ANCHOR;
use crate::text::visible_text;

/// Label used when neither the anchor text nor its column header says anything.
pub(crate) const FALLBACK_LINK_LABEL: &str = "Link";

/// Builds a [`Link`] from an `<a>` element. Anchors without a usable href yield `None`.
///
/// The label is the anchor's visible text, then `fallback_label` if given and
/// non-empty, then [`FALLBACK_LINK_LABEL`].
pub(crate) fn link_from_anchor(anchor: ElementRef<'_>, fallback_label: Option<&str>) -> Option<Link> {
    let href = anchor.value().attr("href").map(str::trim)?;
    if href.is_empty() {
        return None;
    }

    let text = visible_text(anchor);
    let label = if !text.is_empty() {
        text
    } else {
        fallback_label
            .filter(|label| !label.is_empty())
            .unwrap_or(FALLBACK_LINK_LABEL)
            .to_string()
    };

    Some(Link::new(label, href))
}

/// Every usable anchor below `scope`, in document order.
pub(crate) fn links_within(scope: ElementRef<'_>, fallback_label: Option<&str>) -> Vec<Link> {
    scope
        .select(&ANCHOR)
        .filter_map(|anchor| link_from_anchor(anchor, fallback_label))
        .collect()
}
