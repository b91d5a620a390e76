//! Error types for `renloc` operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal failures that abort an operation.
///
/// Non-fatal conditions (skipped records, out-of-range line numbers) are
/// collected as [`crate::diagnostics::Diagnostic`]s instead and never abort
/// a run.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum OpError {
    /// An input path does not exist.
    #[error("file not found: {}", .path.display())]
    MissingFile {
        /// The path that could not be opened.
        path: PathBuf,
    },

    /// The placeholder mapping file is not a valid JSON array of strings.
    #[error("mapping file is not valid JSON: {}: {source}", .path.display())]
    MalformedMapping {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed translation file contained no usable records.
    #[error("translation file contains no usable records: {}", .path.display())]
    EmptyTranslation { path: PathBuf },

    /// Any other I/O fault, reported with the underlying cause.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OpError {
    /// Classify a read failure: absent files get the dedicated
    /// missing-file variant, everything else stays an I/O error.
    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                action: "failed to read",
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Io {
            action: "failed to write",
            path: path.to_path_buf(),
            source,
        }
    }
}
