use std::sync::LazyLock;

use scraper::Selector;

/// Marker id of the seminar management table on the overview page.
pub(crate) const OVERVIEW_TABLE_CSS: &str = "#datatable-seminarmanagement";

/// Description blocks on a detail page, in priority order.
pub(crate) const DESCRIPTION_CSS: [&str; 5] = [
    ".seminar-description",
    ".seminar-description-text",
    "#seminar-description",
    ".seminar-content",
    "main",
];

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("invalid static selector {css:?}: {err:?}"))
}

pub(crate) static OVERVIEW_TABLE: LazyLock<Selector> =
    LazyLock::new(|| compile(OVERVIEW_TABLE_CSS));
pub(crate) static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| compile("thead th"));
pub(crate) static BODY_ROW: LazyLock<Selector> = LazyLock::new(|| compile("tbody tr"));
pub(crate) static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| compile("td"));
pub(crate) static ANCHOR: LazyLock<Selector> = LazyLock::new(|| compile("a[href]"));
pub(crate) static DESCRIPTION_BLOCKS: LazyLock<Vec<Selector>> =
    LazyLock::new(|| DESCRIPTION_CSS.iter().map(|css| compile(css)).collect());
