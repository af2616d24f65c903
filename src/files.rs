//! Input resolution and whole-file I/O.
//!
//! Output paths are derived by plain substring substitution on the input
//! path. Reads and writes are blocking, whole-file and UTF-8.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::options::Options;

/// Derive the JSON output path from the input path.
///
/// The first occurrence of `options.input_extension` is replaced by
/// `options.output_extension`. When the input path does not contain it (or
/// is not valid UTF-8), the output extension is appended to the whole path
/// so the input file is never the write target.
///
/// # Example
///
/// ```rust
/// use article_json::{files::json_output_path, Options};
/// use std::path::{Path, PathBuf};
///
/// let path = json_output_path(Path::new("article.html"), &Options::default());
/// assert_eq!(path, PathBuf::from("article.content.json"));
/// ```
#[must_use]
pub fn json_output_path(input: &Path, options: &Options) -> PathBuf {
    let from = options.input_extension.as_str();
    let to = options.output_extension.as_str();

    if let Some(raw) = input.to_str() {
        if !from.is_empty() && raw.contains(from) {
            return PathBuf::from(raw.replacen(from, to, 1));
        }
    }

    log::warn!(
        "input path `{}` does not contain `{from}`, appending `{to}`",
        input.display()
    );
    let mut path = input.as_os_str().to_os_string();
    path.push(to);
    PathBuf::from(path)
}

/// Fail with [`Error::InputNotFound`] unless `path` exists.
pub fn ensure_exists(path: &Path) -> Result<()> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::InputNotFound { path: path.to_path_buf() }),
        Err(source) => Err(Error::ReadFailure { path: path.to_path_buf(), source }),
    }
}

/// Read the whole file as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`, creating or truncating it.
pub fn write_file(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
