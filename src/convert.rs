//! The conversion pipeline: check, read, parse, extract, write.

use std::path::{Path, PathBuf};

use crate::article::Article;
use crate::dom;
use crate::error::{Error, Result};
use crate::extract::ArticleExtractor;
use crate::files;
use crate::options::Options;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Where the JSON record was written.
    pub json_path: PathBuf,
    /// Where the raw content HTML was written.
    pub sidecar_path: PathBuf,
    /// The extracted article.
    pub article: Article,
}

/// Parse `html` and extract its article, failing when there is none.
pub(crate) fn extract_from_html(html: &str, extractor: &dyn ArticleExtractor) -> Result<Article> {
    let document = dom::parse_html(html);
    extractor
        .extract_article(document)
        .and_then(|article| {
            article.ok_or_else(|| Error::ExtractionFailure("no article content found".to_string()))
        })
}

/// Run the whole pipeline for one input file.
pub(crate) fn convert_file(
    input: &Path,
    options: &Options,
    extractor: &dyn ArticleExtractor,
) -> Result<Report> {
    files::ensure_exists(input)?;
    let json_path = files::json_output_path(input, options);

    let html = files::read_file(input)?;
    log::debug!("read {} bytes from `{}`", html.len(), input.display());

    let article = extract_from_html(&html, extractor)?;
    log::debug!("extracted article {:?} ({} chars)", article.title, article.length);

    let json = serde_json::to_string(&article)?;
    files::write_file(&json, &json_path)?;
    log::debug!("wrote `{}`", json_path.display());

    files::write_file(&article.content, &options.sidecar_path)?;
    log::debug!("wrote `{}`", options.sidecar_path.display());

    Ok(Report {
        json_path,
        sidecar_path: options.sidecar_path.clone(),
        article,
    })
}
