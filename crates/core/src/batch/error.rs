//! Error types for the batch module.

use std::path::PathBuf;
use thiserror::Error;

use crate::converter::ConverterError;

/// Faults that abort a batch.
///
/// Per-file transcode failures are not errors at this level; they are reported
/// as `FileStatus::Failed` and the batch carries on.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The folder could not be listed.
    #[error("Failed to list directory: {path}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A conversion failed for a reason other than the engine rejecting the file.
    #[error("Converting {file} failed: {source}")]
    Conversion {
        file: String,
        #[source]
        source: ConverterError,
    },

    /// A status line could not be written.
    #[error("Failed to write status line: {0}")]
    Report(#[source] std::io::Error),
}
