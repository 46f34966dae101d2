//! Convenience constructors for `MixinError`.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use super::MixinError;

impl MixinError {
    /// Wrap a read or parse failure for `path`.
    #[must_use]
    pub fn file(path: &Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    /// Report that no document exists at `path`.
    #[must_use]
    pub fn missing(path: &Path) -> Arc<Self> {
        Arc::new(Self::Missing {
            path: path.to_path_buf(),
        })
    }

    /// Report that the document at `path` has no content.
    #[must_use]
    pub fn empty(path: &Path) -> Arc<Self> {
        Arc::new(Self::Empty {
            path: path.to_path_buf(),
        })
    }

    /// Wrap a write failure for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Wrap a failure writing to an output stream.
    #[must_use]
    pub fn write(source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::Write(source))
    }

    /// Returns `true` when the error means the document is simply absent
    /// rather than broken.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Empty { .. })
    }
}
