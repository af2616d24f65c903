//! # article-json
//!
//! Converts a saved HTML page into a JSON record of its readable article.
//!
//! The heavy lifting is delegated: `dom_query` parses the HTML and
//! `dom_smoothie` (a port of Mozilla Readability) isolates the main content.
//! This crate wires them together, serializes the [`Article`] and writes two
//! files per run:
//!
//! - `<input with .html replaced by .content.json>`: the full record as JSON
//! - `parsed-article.html` in the working directory: the raw `content` HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use article_json::extract_article;
//!
//! let prose = "Readable text that is long enough to look like an article body. ".repeat(10);
//! let html = format!(
//!     "<html><head><title>My Article Title</title></head>\
//!      <body><article><h1>My Article Title</h1><p>{prose}</p></article></body></html>"
//! );
//!
//! let article = extract_article(&html)?;
//! assert_eq!(article.length, article.text_content.chars().count());
//! # Ok::<(), article_json::Error>(())
//! ```

mod article;
mod convert;
mod error;
mod extract;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Output path derivation and whole-file I/O.
pub mod files;

use std::path::Path;

// Public API - re-exports
pub use article::Article;
pub use convert::Report;
pub use error::{Error, Result};
pub use extract::{ArticleExtractor, Readability};
pub use options::{Options, INPUT_EXTENSION, OUTPUT_EXTENSION, SIDECAR_FILE_NAME};

/// Extracts the article from an HTML string with the default extractor.
///
/// Returns [`Error::ExtractionFailure`] when the document holds no
/// article-like content.
pub fn extract_article(html: &str) -> Result<Article> {
    convert::extract_from_html(html, &Readability)
}

/// Converts one HTML file using default options.
///
/// Writes the JSON record next to the input and the sidecar
/// `parsed-article.html` into the current working directory.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let report = article_json::run(Path::new("saved/article.html"))?;
/// println!("{}", report.json_path.display());
/// # Ok::<(), article_json::Error>(())
/// ```
pub fn run(input: &Path) -> Result<Report> {
    run_with_options(input, &Options::default())
}

/// Converts one HTML file with custom options.
pub fn run_with_options(input: &Path, options: &Options) -> Result<Report> {
    run_with(input, options, &Readability)
}

/// Converts one HTML file with custom options and a custom extractor.
///
/// # Arguments
///
/// * `input` - Path of the HTML file to read
/// * `options` - Output locations
/// * `extractor` - Replacement for the default readability extractor
pub fn run_with(input: &Path, options: &Options, extractor: &dyn ArticleExtractor) -> Result<Report> {
    convert::convert_file(input, options, extractor)
}
