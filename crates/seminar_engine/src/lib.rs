//! Seminar engine: pure extraction from already-fetched portal pages.
//!
//! Nothing in this crate performs I/O. Missing page structure never raises;
//! it shows up as empty collections, empty text or `None` fields.
mod decode;
mod detail;
mod ident;
mod links;
mod overview;
mod patterns;
mod selectors;
mod text;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use detail::parse_detail;
pub use ident::{resolve_seminar_id, SEMINAR_ID_PARAMS};
pub use overview::parse_overview;
pub use patterns::{classify_delivery_mode, extract_registered_count};
pub use text::visible_text;
