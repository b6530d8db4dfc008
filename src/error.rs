//! Error taxonomy for loading, saving and resolving constraint files.
//!
//! Malformed constraint syntax is never an error: unknown lines are carried through verbatim.
//! What remains are I/O failures, which keep the underlying [`io::Error`] as their source, and
//! invalid target states, which are reported before any file is touched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Failures surfaced to the caller of a load, save or destination lookup.
pub enum Error {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The destination (or one of its parent directories) could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A save was requested before any document was opened.
    #[error("no constraint file is open")]
    NoDocument,
    /// The save mode does not resolve to a usable destination path.
    #[error("invalid destination: {0}")]
    InvalidDestination(String),
    /// Preferences could not be serialised.
    #[error("invalid preferences file {}: {source}", .path.display())]
    Preferences {
        /// Preferences file being written.
        path: PathBuf,
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    #[must_use]
    /// Whether this failure came from the filesystem rather than from validation.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}
