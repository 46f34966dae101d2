//! Loading entrypoints with strict and lenient failure handling.

use std::path::Path;

use crate::{Document, MixinError, MixinResult};

use super::parser::parse_document;

/// Load the document at `path`, selecting the parser from its extension.
///
/// Returns `Ok(None)` when `path` is not a regular file.
///
/// # Errors
///
/// Returns [`MixinError::Empty`] for zero-length or whitespace-only files and
/// [`MixinError::File`] when reading or parsing fails.
pub fn load_document(path: &Path) -> MixinResult<Option<Document>> {
    if !path.is_file() {
        return Ok(None);
    }
    let data = std::fs::read_to_string(path).map_err(|e| MixinError::file(path, e))?;
    if data.trim().is_empty() {
        return Err(MixinError::empty(path));
    }
    parse_document(path, &data).map(Some)
}

/// Load the document at `path`, treating a missing file as an error.
///
/// # Errors
///
/// Returns [`MixinError::Missing`] when `path` is not a regular file, and
/// otherwise the errors of [`load_document`].
pub fn require_document(path: &Path) -> MixinResult<Document> {
    load_document(path)?.ok_or_else(|| MixinError::missing(path))
}

/// Load the document at `path`, or `None` when it is missing, empty, or
/// malformed.
///
/// A document that parses to an empty mapping is also reported as `None`,
/// since it is indistinguishable from the absent stand-in. Failures are logged
/// at `WARN` and never returned.
///
/// # Examples
///
/// ```rust
/// use config_mixin::load_document_or_absent;
/// use std::path::Path;
///
/// assert!(load_document_or_absent(Path::new("does/not/exist.json")).is_none());
/// ```
#[must_use]
pub fn load_document_or_absent(path: &Path) -> Option<Document> {
    match require_document(path) {
        Ok(Document::Object(map)) if map.is_empty() => {
            tracing::debug!(path = %path.display(), "document is an empty mapping");
            None
        }
        Ok(document) => Some(document),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "failed to load document; treating it as absent"
            );
            None
        }
    }
}
