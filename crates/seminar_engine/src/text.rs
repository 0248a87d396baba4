use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Visible text of an element: every descendant text node trimmed, empty ones
/// dropped, joined with single spaces.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_text(element, &mut parts);
    parts.join(" ")
}

/// Visible text of a whole document.
pub(crate) fn page_text(document: &Html) -> String {
    visible_text(document.root_element())
}

fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            Node::Element(el) => {
                if is_hidden(el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, parts);
                }
            }
            _ => {}
        }
    }
}

/// Elements whose text content is never shown to a reader.
fn is_hidden(name: &str) -> bool {
    matches!(name, "script" | "style" | "noscript" | "template")
}
