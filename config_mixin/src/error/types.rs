//! Primary error enum for document loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur at the document boundary.
///
/// The merge itself never fails; these describe problems reading inputs or
/// writing the merged result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MixinError {
    /// The document could not be read or parsed.
    #[error("document error in '{path}': {source}")]
    File {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying read or parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No regular file exists at the requested path.
    #[error("document '{path}' does not exist")]
    Missing {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The document exists but holds no content.
    #[error("document '{path}' is empty")]
    Empty {
        /// Path of the empty document.
        path: PathBuf,
    },

    /// The merged document could not be serialised.
    #[error("failed to serialise document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the rendered document to an output stream failed.
    #[error("failed to write document: {0}")]
    Write(#[source] std::io::Error),

    /// Writing the rendered document failed.
    #[error("failed to write document to '{path}': {source}")]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
