//! Deep delete of the keys a patch names.
//!
//! Patch values are sentinels. A record recurses into the matching subtree,
//! anything else (null, a number, an array) removes the key outright.

use crate::is_plain_record;
use serde_json::{Map, Value};

/// Remove the fields named by `patch` from `base`, returning a new document.
///
/// Recursion only follows records on both sides. A record patch value over
/// an absent key, an array or a scalar is a no-op, since none of those has
/// children to prune. A non-record `base` or `patch` returns `base` as is.
pub fn delete_fields(base: &Value, patch: &Value) -> Value {
    delete_fields_owned(base.clone(), patch)
}

/// [`delete_fields`] that takes ownership of `base` and prunes it in place.
pub fn delete_fields_owned(base: Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Object(mut record), Value::Object(patch_record)) => {
            prune_into(&mut record, patch_record);
            Value::Object(record)
        }
        (base, _) => base,
    }
}

fn prune_into(base: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, sentinel) in patch {
        if !is_plain_record(sentinel) {
            base.remove(key);
            continue;
        }
        if let (Some(Value::Object(subtree)), Value::Object(children)) = (base.get_mut(key), sentinel) {
            prune_into(subtree, children);
        }
    }
}
