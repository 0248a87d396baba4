use engine_logging::{engine_debug, engine_trace};
use scraper::{ElementRef, Html};
use seminar_core::{Link, Seminar};

use crate::ident::resolve_seminar_id;
use crate::links::link_from_anchor;
use crate::selectors::{ANCHOR, BODY_ROW, DATA_CELL, HEADER_CELL, OVERVIEW_TABLE};
use crate::text::visible_text;

/// Header substrings that mark the title column (headers are lower-cased).
const TITLE_HEADER_TOKENS: [&str; 3] = ["seminar", "titel", "bezeichnung"];

/// Parses the seminar management overview into one stub per table row.
///
/// Returns an empty list when the management table is missing. Column meaning
/// comes from the header text, never from column position.
pub fn parse_overview(html: &str) -> Vec<Seminar> {
    let document = Html::parse_document(html);
    let Some(table) = document.select(&OVERVIEW_TABLE).next() else {
        engine_debug!("overview: management table not found, page shape not recognized");
        return Vec::new();
    };

    let headers: Vec<String> = table
        .select(&HEADER_CELL)
        .map(|th| visible_text(th).to_lowercase())
        .collect();

    let seminars: Vec<Seminar> = table
        .select(&BODY_ROW)
        .filter_map(|row| parse_row(row, &headers))
        .collect();

    engine_debug!(
        "overview: {} header(s), {} seminar row(s)",
        headers.len(),
        seminars.len()
    );
    seminars
}

fn parse_row(row: ElementRef<'_>, headers: &[String]) -> Option<Seminar> {
    let mut cells = row.select(&DATA_CELL).peekable();
    // Header-only rows end up in <tbody> when the page omits <thead>.
    cells.peek()?;

    let mut acc = RowAccumulator::default();
    for (idx, cell) in cells.enumerate() {
        let header = headers.get(idx).map(String::as_str).unwrap_or("");
        for anchor in cell.select(&ANCHOR) {
            if let Some(link) = link_from_anchor(anchor, Some(header)) {
                acc.offer_link(link);
            }
        }
        acc.offer_cell_text(header, visible_text(cell));
    }

    let seminar = acc.finish();
    engine_trace!(
        "overview row: id={:?} title={:?} links={}",
        seminar.seminar_id,
        seminar.title,
        seminar.links.len()
    );
    Some(seminar)
}

/// Collects one row's fields in column order. Every single-valued field is
/// set by the first candidate offered and never overwritten afterwards.
#[derive(Debug, Default)]
struct RowAccumulator {
    header_title: Option<String>,
    fallback_title: Option<String>,
    management_url: Option<String>,
    seminar_id: Option<String>,
    links: Vec<Link>,
}

impl RowAccumulator {
    fn offer_link(&mut self, link: Link) {
        if self.management_url.is_none() {
            self.management_url = Some(link.url.clone());
        }
        if self.seminar_id.is_none() {
            self.seminar_id = resolve_seminar_id(&link.url);
        }
        self.links.push(link);
    }

    fn offer_cell_text(&mut self, header: &str, text: String) {
        if text.is_empty() {
            return;
        }
        if self.header_title.is_none() && is_title_header(header) {
            self.header_title = Some(text);
        } else if self.fallback_title.is_none() {
            self.fallback_title = Some(text);
        }
    }

    fn finish(self) -> Seminar {
        Seminar {
            seminar_id: self.seminar_id,
            title: self.header_title.or(self.fallback_title).unwrap_or_default(),
            management_url: self.management_url,
            links: self.links,
            detail: None,
        }
    }
}

fn is_title_header(header: &str) -> bool {
    TITLE_HEADER_TOKENS.iter().any(|token| header.contains(token))
}
