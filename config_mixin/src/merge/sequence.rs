//! Sequence merge policies.

use std::collections::HashMap;

use serde_json::Value;

use super::merge_value;
use super::strategy::{SequenceStrategy, record_name};

pub(super) fn merge_sequence(base: &mut Vec<Value>, mixin: &[Value]) {
    let Some(strategy) = SequenceStrategy::for_mixin(mixin) else {
        tracing::debug!("empty mixin sequence leaves base untouched");
        return;
    };
    tracing::debug!(?strategy, base = base.len(), mixin = mixin.len(), "merging sequences");
    match strategy {
        SequenceStrategy::KeyedUpsert => upsert_records(base, mixin),
        SequenceStrategy::PrependUnique => prepend_unique(base, mixin),
    }
}

/// Identity key for a record name.
///
/// Scalars are keyed by their JSON rendering so `"1"` and `1` stay distinct.
fn identity(name: &Value) -> String {
    name.to_string()
}

/// Update matching base records in place and append everything else.
///
/// The index is built once from the original base. When the base repeats a
/// name, the last occurrence is the one updated; records appended by this call
/// are never matched by later mixin items.
fn upsert_records(base: &mut Vec<Value>, mixin: &[Value]) {
    let positions: HashMap<String, usize> = base
        .iter()
        .enumerate()
        .filter_map(|(position, item)| record_name(item).map(|name| (identity(name), position)))
        .collect();

    for item in mixin {
        let matched = record_name(item)
            .and_then(|name| positions.get(&identity(name)))
            .copied();
        match matched.and_then(|position| base.get_mut(position)) {
            Some(existing) => merge_value(existing, item),
            None => base.push(item.clone()),
        }
    }
}

/// Rebuild `base` as the mixin followed by base elements absent from it.
///
/// Only duplicates of mixin elements are dropped; repeated base elements that
/// the mixin does not mention are kept.
fn prepend_unique(base: &mut Vec<Value>, mixin: &[Value]) {
    let retained: Vec<Value> = std::mem::take(base)
        .into_iter()
        .filter(|item| !mixin.contains(item))
        .collect();
    base.reserve(mixin.len() + retained.len());
    base.extend_from_slice(mixin);
    base.extend(retained);
}
