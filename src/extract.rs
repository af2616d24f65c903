//! Readability extraction seam.
//!
//! The heuristics that isolate the main content live in `dom_smoothie`; this
//! module only adapts its result to [`Article`] and decides what counts as
//! "no article".

use crate::article::Article;
use crate::dom::{self, Document};
use crate::error::{Error, Result};

/// Turns a parsed document into an article record.
///
/// Returns `Ok(None)` when the document holds no article-like content.
pub trait ArticleExtractor {
    fn extract_article(&self, document: Document) -> Result<Option<Article>>;
}

/// Mozilla Readability port (`dom_smoothie`) with its default configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Readability;

impl ArticleExtractor for Readability {
    fn extract_article(&self, document: Document) -> Result<Option<Article>> {
        let heading = single_heading(&document);

        let mut reader = dom_smoothie::Readability::with_document(document, None, None)
            .map_err(|err| Error::ExtractionFailure(err.to_string()))?;

        let article = reader
            .parse()
            .map_err(|err| Error::ExtractionFailure(err.to_string()))?;

        if article.text_content.trim().is_empty() {
            log::debug!("readability returned an article with no text");
            return Ok(None);
        }

        let mut article = Article::from(article);
        if article.title.trim().is_empty() {
            if let Some(heading) = heading {
                log::debug!("no document title, using the only <h1>");
                article.title = heading;
            }
        }

        Ok(Some(article))
    }
}

/// Trimmed text of the document's `<h1>`, when there is exactly one.
fn single_heading(document: &Document) -> Option<String> {
    let headings = document.select("h1");
    if headings.length() != 1 {
        return None;
    }
    let text = dom::text_content(&headings).trim().to_string();
    (!text.is_empty()).then_some(text)
}
