//! File-level merge entrypoints.
//!
//! [`merge_documents`] never fails: unreadable inputs degrade to "absent" and
//! the degenerate cases short-circuit before the merge runs.
//! [`try_merge_documents`] is the strict variant that reports every loading
//! problem instead.

use std::path::Path;

use crate::file::{load_document_or_absent, require_document};
use crate::{Document, MixinResult, empty_document, merge};

/// Load `base_path` and `mixin_path` and merge the mixin over the base.
///
/// - Neither document loads: returns an empty mapping.
/// - Only one loads: returns it unchanged.
/// - Both load: returns [`merge`] of the two.
///
/// Missing, empty, malformed, and empty-mapping documents all count as not
/// loaded; each failure is logged as a warning.
///
/// # Examples
///
/// ```rust
/// use config_mixin::merge_documents;
/// use serde_json::json;
/// use std::path::Path;
///
/// let merged = merge_documents(Path::new("missing-base.json"), Path::new("missing-mixin.json"));
/// assert_eq!(merged, json!({}));
/// ```
#[must_use]
pub fn merge_documents(base_path: &Path, mixin_path: &Path) -> Document {
    let base = load_document_or_absent(base_path);
    let mixin = load_document_or_absent(mixin_path);
    combine(base, mixin)
}

/// Strict form of [`merge_documents`].
///
/// # Errors
///
/// Returns the first loading error, checking the base before the mixin:
/// [`crate::MixinError::Missing`], [`crate::MixinError::Empty`] or
/// [`crate::MixinError::File`].
pub fn try_merge_documents(base_path: &Path, mixin_path: &Path) -> MixinResult<Document> {
    let base = require_document(base_path)?;
    let mixin = require_document(mixin_path)?;
    Ok(merge(base, &mixin))
}

fn combine(base: Option<Document>, mixin: Option<Document>) -> Document {
    match (base, mixin) {
        (Some(base), Some(mixin)) => merge(base, &mixin),
        (Some(only), None) => {
            tracing::debug!("mixin absent; returning base unchanged");
            only
        }
        (None, Some(only)) => {
            tracing::debug!("base absent; returning mixin unchanged");
            only
        }
        (None, None) => {
            tracing::debug!("no documents loaded; returning an empty mapping");
            empty_document()
        }
    }
}
