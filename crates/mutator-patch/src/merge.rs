//! Deep merge of a partial patch into a document.

use crate::is_plain_record;
use serde_json::{Map, Value};

/// Merge `patch` into `base`, returning a new document.
///
/// For every key in `patch`: when both sides hold a record the merge
/// recurses, otherwise the patch value replaces the base value outright.
/// That includes arrays and `null`; a `null` patch value stores `null`.
/// Keys missing from `patch` are carried over untouched.
///
/// A non-record `base` is replaced by `patch` entirely. A record `base` with
/// a non-record `patch` comes back unchanged.
pub fn merge(base: &Value, patch: &Value) -> Value {
    merge_owned(base.clone(), patch)
}

/// [`merge`] that takes ownership of `base` and edits it in place.
pub fn merge_owned(base: Value, patch: &Value) -> Value {
    if !is_plain_record(&base) {
        return patch.clone();
    }
    match (base, patch) {
        (Value::Object(mut record), Value::Object(patch_record)) => {
            merge_into(&mut record, patch_record);
            Value::Object(record)
        }
        (base, _) => base,
    }
}

fn merge_into(base: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, patch_value) in patch {
        let both_records =
            is_plain_record(patch_value) && base.get(key).is_some_and(is_plain_record);

        match (base.get_mut(key), patch_value) {
            (Some(Value::Object(child)), Value::Object(patch_child)) if both_records => {
                merge_into(child, patch_child);
            }
            _ => {
                base.insert(key.clone(), patch_value.clone());
            }
        }
    }
}
