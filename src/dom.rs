//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate: document parsing for the
//! extraction step and the handful of tree edits used by content
//! post-processing.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Parse raw HTML text into a document.
///
/// Fragments are wrapped in a synthesized `<html><body>`, so `select("body")`
/// always addresses the parsed content.
///
/// Parsing is lenient: malformed markup (unclosed tags, invalid nesting,
/// broken entities) is repaired the way a browser would, never rejected.
#[must_use]
pub fn parse_html(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of the selected nodes and their descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

/// Remove the selected elements, subtrees included.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Remove every attribute of every selected element.
///
/// The elements themselves and their children are kept.
pub fn remove_all_attributes(sel: &Selection) {
    for node in sel.nodes() {
        let names: Vec<String> = node
            .attrs()
            .iter()
            .map(|attr| attr.name.local.to_string())
            .collect();
        let element = Selection::from(node.clone());
        for name in &names {
            element.remove_attr(name);
        }
    }
}
