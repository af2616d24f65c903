//! Error types for article-json.
//!
//! Every stage of the pipeline reports failure through [`Error`]. Nothing in
//! the library terminates the process; the binary maps an error to its exit
//! status with [`Error::exit_code`].

use std::io;
use std::path::PathBuf;

/// Error type for a single conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path argument was not given.
    #[error("missing required argument `<FILE>`: HTML input file")]
    MissingArgument,

    /// The input path does not exist.
    #[error("input file `{}` does not exist", path.display())]
    InputNotFound { path: PathBuf },

    /// Reading the input file failed (including invalid UTF-8).
    #[error("failed to read file `{}`: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing one of the output files failed.
    #[error("failed to write file `{}`: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No article content could be extracted from the document.
    #[error("article extraction failed: {0}")]
    ExtractionFailure(String),

    /// The article record could not be encoded as JSON.
    #[error("failed to serialize article: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// All failures are fatal and share status `1`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument
            | Self::InputNotFound { .. }
            | Self::ReadFailure { .. }
            | Self::WriteFailure { .. }
            | Self::ExtractionFailure(_)
            | Self::Serialization(_) => 1,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
