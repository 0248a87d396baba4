use std::fmt;

use serde::{Deserialize, Serialize};

/// Seminar format derived from the announcement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryMode {
    #[serde(rename = "praesenz")]
    Presence,
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl DeliveryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Presence => "praesenz",
            DeliveryMode::Online => "online",
            DeliveryMode::Hybrid => "hybrid",
            DeliveryMode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled hyperlink. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Everything read from a seminar's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeminarDetail {
    /// Description block text, or the whole page text when no block was found.
    pub description: String,
    pub delivery_mode: DeliveryMode,
    pub registered_count: Option<u64>,
    /// Links in document order.
    pub links: Vec<Link>,
}

impl SeminarDetail {
    pub fn link_urls(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.url.as_str()).collect()
    }
}

/// One row of the management overview, optionally enriched with its detail page.
///
/// An empty `title` means no usable cell text was found in the row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seminar {
    pub seminar_id: Option<String>,
    pub title: String,
    pub management_url: Option<String>,
    pub links: Vec<Link>,
    pub detail: Option<SeminarDetail>,
}

impl Seminar {
    /// Merges a detail page into this stub, replacing any earlier detail.
    pub fn attach_detail(&mut self, detail: SeminarDetail) {
        self.detail = Some(detail);
    }

    /// Overview links followed by detail links.
    pub fn all_links(&self) -> Vec<&Link> {
        let detail_links = self.detail.iter().flat_map(|detail| detail.links.iter());
        self.links.iter().chain(detail_links).collect()
    }

    pub fn link_urls(&self) -> Vec<&str> {
        self.all_links()
            .into_iter()
            .map(|link| link.url.as_str())
            .collect()
    }
}
