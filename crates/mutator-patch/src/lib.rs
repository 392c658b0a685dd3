//! # mutator-patch
//!
//! Patch algebra for the Mutator document history engine.
//!
//! This crate provides:
//! - Deep merge: combine a document with a partial patch, records recurse
//! - Deep delete: prune the keys a patch names, at any depth
//!
//! Both operations are pure and total. They never mutate their inputs and
//! never fail, whatever the shapes of the two values.
//!
//! ## Arrays
//!
//! Arrays are atomic. A merge replaces an array wholesale and a delete never
//! descends into one.
//!
//! ## Example
//!
//! ```rust
//! use mutator_patch::{delete_fields, merge};
//! use serde_json::json;
//!
//! let doc = json!({"a": 1, "b": {"c": 2, "d": [1, 2]}});
//!
//! let merged = merge(&doc, &json!({"b": {"c": 3}}));
//! assert_eq!(merged, json!({"a": 1, "b": {"c": 3, "d": [1, 2]}}));
//!
//! let pruned = delete_fields(&merged, &json!({"b": {"d": null}}));
//! assert_eq!(pruned, json!({"a": 1, "b": {"c": 3}}));
//! ```

mod delete;
mod merge;

pub use delete::{delete_fields, delete_fields_owned};
pub use merge::{merge, merge_owned};

use serde_json::Value;

/// Returns true if `value` is a plain associative record (a JSON object).
///
/// Arrays, strings, numbers, booleans and null are not records.
pub fn is_plain_record(value: &Value) -> bool {
    value.is_object()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_plain_record() {
        assert!(is_plain_record(&json!({})));
        assert!(is_plain_record(&json!({"a": [1]})));
        assert!(!is_plain_record(&json!([])));
        assert!(!is_plain_record(&json!(null)));
        assert!(!is_plain_record(&json!("x")));
        assert!(!is_plain_record(&json!(3.5)));
        assert!(!is_plain_record(&json!(false)));
    }
}
