//! # mutator-history
//!
//! Bounded undo/redo history for JSON documents.
//!
//! This crate provides:
//! - [`Mutator`]: base snapshot plus undo and redo stacks of change records
//! - Create, update and delete patches replayed through `mutator-patch`
//! - Eviction that folds the oldest change into the base past the limit
//! - Versioned change notices with origin tags, pollable or broadcast
//! - [`TypedMutator`] for documents backed by a serde type
//! - [`SharedMutator`] for locked access from several threads
//!
//! ## Example
//!
//! ```rust
//! use mutator_history::{Mutator, MutatorConfig};
//! use serde_json::json;
//!
//! let mut mutator = Mutator::new(MutatorConfig::with_limit(10));
//! mutator.initialize(json!({"a": 1, "b": {"c": 2}}));
//!
//! mutator.update(json!({"b": {"c": 3}}), Some("inspector"));
//! mutator.delete(json!({"a": null}), None);
//! assert_eq!(mutator.get_snapshot(), json!({"b": {"c": 3}}));
//!
//! mutator.undo();
//! assert_eq!(mutator.get_snapshot(), json!({"a": 1, "b": {"c": 3}}));
//! assert_eq!(mutator.version(), 3);
//! assert!(mutator.can_redo());
//! ```

pub mod config;
pub mod error;
pub mod mutator;
pub mod notify;
pub mod record;
pub mod shared;
pub mod typed;

pub use config::{MutatorConfig, MutatorConfigBuilder, DEFAULT_LIMIT};
pub use error::{MutatorError, Result};
pub use mutator::Mutator;
pub use notify::{ChangeNotice, MutatorEvent, EVENT_CAPACITY};
pub use record::{Action, ChangeRecord};
pub use shared::SharedMutator;
pub use typed::TypedMutator;

// Patch algebra re-exports
pub use mutator_patch::{delete_fields, delete_fields_owned, is_plain_record, merge, merge_owned};
