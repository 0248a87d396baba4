use url::{ParseError, Url};

/// Query parameters that carry a seminar id, checked in this order.
pub const SEMINAR_ID_PARAMS: [&str; 3] = ["seminar", "id", "seminarId"];

/// Base used only to read the query of relative links such as `detail?seminarId=99`.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Extracts a seminar id from a link's query string.
///
/// Returns the first non-empty value of the first candidate parameter present.
/// Links without a query, or that cannot be parsed, give `None`.
pub fn resolve_seminar_id(url: &str) -> Option<String> {
    let parsed = parse_lenient(url.trim())?;
    parsed.query()?;

    SEMINAR_ID_PARAMS.iter().find_map(|param| {
        parsed
            .query_pairs()
            .find(|(key, value)| key == param && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    })
}

fn parse_lenient(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(RELATIVE_BASE).ok()?.join(raw).ok()
        }
        Err(_) => None,
    }
}
