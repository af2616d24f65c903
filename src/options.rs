//! Configuration options for a conversion run.
//!
//! The `Options` struct controls where outputs are written. The command-line
//! tool always runs with `Options::default()`.

use std::path::PathBuf;

/// Default substring replaced in the input path.
pub const INPUT_EXTENSION: &str = ".html";

/// Default replacement producing the JSON output path.
pub const OUTPUT_EXTENSION: &str = ".content.json";

/// Default sidecar file name, relative to the working directory.
pub const SIDECAR_FILE_NAME: &str = "parsed-article.html";

/// Configuration options for a conversion run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_json::Options;
///
/// let options = Options {
///     sidecar_path: "/tmp/preview.html".into(),
///     ..Options::default()
/// };
/// assert_eq!(options.output_extension, ".content.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Substring of the input path replaced to derive the JSON path.
    ///
    /// Only the first occurrence is replaced.
    ///
    /// Default: `".html"`
    pub input_extension: String,

    /// Replacement for `input_extension` in the JSON path.
    ///
    /// Default: `".content.json"`
    pub output_extension: String,

    /// Destination of the raw `content` HTML.
    ///
    /// Relative paths resolve against the current working directory, not
    /// against the input file.
    ///
    /// Default: `"parsed-article.html"`
    pub sidecar_path: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_extension: INPUT_EXTENSION.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
            sidecar_path: PathBuf::from(SIDECAR_FILE_NAME),
        }
    }
}
