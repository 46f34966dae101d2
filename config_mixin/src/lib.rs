//! Core crate for the `config-mixin` document merger.
//!
//! A mixin document is overlaid onto a base document with three rules:
//! mappings merge key by key, sequences either upsert `name`-keyed records or
//! prepend the mixin's entries while dropping duplicates, and every other
//! pairing lets the mixin win outright. The [`merge`] function is the whole
//! algorithm; the [`file`], [`render`] and [`documents`] modules wrap it with
//! loading and serialisation so callers can merge files directly.
//!
//! # Example
//!
//! ```rust
//! use config_mixin::merge;
//! use serde_json::json;
//!
//! let base = json!({"rules": ["RULE1", "RULE2"], "port": 7890});
//! let mixin = json!({"rules": ["RULE0"], "mode": "rule"});
//!
//! let merged = merge(base, &mixin);
//! assert_eq!(
//!     merged,
//!     json!({"rules": ["RULE0", "RULE1", "RULE2"], "port": 7890, "mode": "rule"})
//! );
//! ```

pub mod documents;
mod error;
pub mod file;
mod merge;
pub mod render;
mod result_ext;

pub use documents::{merge_documents, try_merge_documents};
pub use error::MixinError;
pub use file::{load_document, load_document_or_absent};
pub use merge::{SequenceStrategy, is_record, merge, merge_value, record_name};
pub use result_ext::MixinResultExt;

/// Re-export of the JSON value type so callers share one document model.
pub use serde_json;

/// Generic configuration tree: a mapping, a sequence, or a scalar.
///
/// Objects keep insertion order, so keys introduced by a mixin land after the
/// keys the base already had.
pub type Document = serde_json::Value;

/// Result alias used by every fallible operation in the crate.
pub type MixinResult<T> = Result<T, std::sync::Arc<MixinError>>;

/// Returns the empty mapping used as the stand-in for an absent document.
#[must_use]
pub fn empty_document() -> Document {
    Document::Object(serde_json::Map::new())
}
