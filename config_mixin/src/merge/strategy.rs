//! Selection of the sequence merge policy.

use serde_json::Value;

use crate::Document;

/// Key that identifies a record inside a sequence.
const RECORD_KEY: &str = "name";

/// Policy used to combine two sequences.
///
/// The policy is chosen by inspecting only the first element of the mixin
/// sequence. A mixin that mixes records with other values is handled entirely
/// by the policy its first element selects: under [`Self::KeyedUpsert`] the
/// non-record items are appended, and under [`Self::PrependUnique`] records
/// are compared by plain value equality like any other element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequenceStrategy {
    /// Update base records whose `name` matches a mixin record, append the
    /// rest of the mixin after the original base elements.
    KeyedUpsert,
    /// Place the mixin elements first, then every base element the mixin does
    /// not already contain.
    PrependUnique,
}

impl SequenceStrategy {
    /// Choose the policy for merging the given mixin sequence.
    ///
    /// Returns `None` for an empty mixin, which never alters the base.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_mixin::SequenceStrategy;
    /// use serde_json::json;
    ///
    /// assert_eq!(SequenceStrategy::for_mixin(&[]), None);
    /// assert_eq!(
    ///     SequenceStrategy::for_mixin(&[json!("RULE0")]),
    ///     Some(SequenceStrategy::PrependUnique)
    /// );
    /// assert_eq!(
    ///     SequenceStrategy::for_mixin(&[json!({"name": "A"})]),
    ///     Some(SequenceStrategy::KeyedUpsert)
    /// );
    /// ```
    #[must_use]
    pub fn for_mixin(mixin: &[Document]) -> Option<Self> {
        mixin.first().map(|first| {
            if is_record(first) {
                Self::KeyedUpsert
            } else {
                Self::PrependUnique
            }
        })
    }
}

/// Returns the identity of `value` when it is a record.
///
/// A record is a mapping whose `name` entry holds a scalar.
#[must_use]
pub fn record_name(value: &Document) -> Option<&Document> {
    value
        .as_object()?
        .get(RECORD_KEY)
        .filter(|name| !matches!(name, Value::Object(_) | Value::Array(_)))
}

/// Returns `true` when `value` is a mapping with a scalar `name` entry.
#[must_use]
pub fn is_record(value: &Document) -> bool {
    record_name(value).is_some()
}
