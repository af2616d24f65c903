//! The article record produced by readability extraction.
//!
//! Field names serialize in camelCase so the JSON output matches what
//! Readability-based tooling expects (`textContent`, `siteName`, ...).

use serde::{Deserialize, Serialize};

use crate::dom;

/// Elements removed by [`Article::strip_images`].
const IMAGE_SELECTOR: &str = "img, figure, picture";

/// The extracted article content.
///
/// `length` is always the character count of `text_content`; it is computed
/// on construction and after every content rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Extracted headline, possibly empty.
    pub title: String,

    /// Author line.
    pub byline: Option<String>,

    /// Text direction (`ltr`/`rtl`).
    pub dir: Option<String>,

    /// Document language.
    pub lang: Option<String>,

    /// Sanitized HTML fragment of the main body.
    pub content: String,

    /// Plain-text rendering of `content`.
    pub text_content: String,

    /// Character count of `text_content`.
    pub length: usize,

    /// Short description of the article.
    pub excerpt: Option<String>,

    /// Publisher name.
    pub site_name: Option<String>,

    /// Publication timestamp as found in the page.
    pub published_time: Option<String>,
}

impl Article {
    /// Build an article from a title and body; optional fields are `None` and
    /// `length` is counted from `text_content`.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, text_content: impl Into<String>) -> Self {
        let text_content = text_content.into();
        Self {
            title: title.into(),
            byline: None,
            dir: None,
            lang: None,
            content: content.into(),
            length: text_content.chars().count(),
            text_content,
            excerpt: None,
            site_name: None,
            published_time: None,
        }
    }

    /// Strip every attribute from `<a>` elements, keeping the tags and
    /// their content.
    pub fn strip_link_attributes(&mut self) {
        self.rewrite_content(|doc| dom::remove_all_attributes(&doc.select("a")));
    }

    /// Remove image-related elements (`img`, `figure`, `picture`) from the
    /// content.
    pub fn strip_images(&mut self) {
        self.rewrite_content(|doc| dom::remove(&doc.select(IMAGE_SELECTOR)));
    }

    fn rewrite_content(&mut self, edit: impl FnOnce(&dom::Document)) {
        let doc = dom::parse_html(&self.content);
        edit(&doc);

        let body = doc.select("body");
        self.content = dom::inner_html(&body);
        self.text_content = dom::text_content(&body);
        self.length = self.text_content.chars().count();
    }
}

impl From<dom_smoothie::Article> for Article {
    fn from(article: dom_smoothie::Article) -> Self {
        let text_content = article.text_content.to_string();
        Self {
            title: article.title,
            byline: article.byline,
            dir: article.dir,
            lang: article.lang,
            content: article.content.to_string(),
            length: text_content.chars().count(),
            text_content,
            excerpt: article.excerpt,
            site_name: article.site_name,
            published_time: article.published_time,
        }
    }
}
