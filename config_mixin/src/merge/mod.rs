//! Recursive document merge.
//!
//! Mappings are overlaid key by key, sequences are combined according to a
//! [`SequenceStrategy`], and any other pairing resolves to the mixin value.

mod sequence;
mod strategy;

use serde_json::{Map, Value};

use crate::Document;

pub use strategy::{SequenceStrategy, is_record, record_name};

/// Merge `mixin` over `base`, consuming `base` and returning the result.
///
/// The returned document reuses `base`'s storage. Values from `mixin` are
/// cloned in wherever they override or extend `base`; `mixin` itself is never
/// modified.
///
/// # Examples
///
/// ```rust
/// use config_mixin::merge;
/// use serde_json::json;
///
/// let merged = merge(json!({"a": 1, "b": {"x": 1}}), &json!({"b": {"y": 2}, "c": 3}));
/// assert_eq!(merged, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
///
/// // Mismatched shapes resolve to the mixin.
/// assert_eq!(merge(json!(5), &json!({"a": 1})), json!({"a": 1}));
/// assert_eq!(merge(json!({"a": 1}), &json!(null)), json!(null));
/// ```
#[must_use]
pub fn merge(mut base: Document, mixin: &Document) -> Document {
    merge_value(&mut base, mixin);
    base
}

/// Overlay `mixin` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Mapping over mapping: every mixin key is merged recursively into the
///   existing entry, or appended when the base lacks it.
/// - Sequence over sequence: see [`SequenceStrategy`]. An empty mixin leaves
///   the base sequence untouched.
/// - Anything else: `target` is replaced by a clone of `mixin`.
pub fn merge_value(target: &mut Document, mixin: &Document) {
    match (target, mixin) {
        (Value::Object(base), Value::Object(overlay)) => merge_mapping(base, overlay),
        (Value::Array(base), Value::Array(overlay)) => sequence::merge_sequence(base, overlay),
        (slot, _) => *slot = mixin.clone(),
    }
}

/// Merge the entries of `overlay` into `base`.
///
/// Existing keys keep their position. New keys are appended in the order the
/// overlay yields them, which relies on `serde_json`'s `preserve_order`.
fn merge_mapping(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
