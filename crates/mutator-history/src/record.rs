//! Change records - the immutable entries of the undo and redo stacks.

use crate::error::Result;
use mutator_patch::{delete_fields_owned, merge_owned};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// What a change record does when replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Add new content. Replays as a merge.
    Create,
    /// Change existing content. Replays as a merge.
    Update,
    /// Remove the keys the patch names. Replays as a deep delete.
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded patch with its action.
///
/// Records own their patch, so nothing a caller does after handing a patch
/// to the engine can reach into history. The fields are private; a record
/// never changes once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    patch: Value,
    action: Action,
}

impl ChangeRecord {
    pub fn new(action: Action, patch: Value) -> Self {
        Self { patch, action }
    }

    pub fn create(patch: Value) -> Self {
        Self::new(Action::Create, patch)
    }

    pub fn update(patch: Value) -> Self {
        Self::new(Action::Update, patch)
    }

    pub fn delete(patch: Value) -> Self {
        Self::new(Action::Delete, patch)
    }

    pub fn patch(&self) -> &Value {
        &self.patch
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Apply this record on top of `base`, consuming it.
    pub fn apply(&self, base: Value) -> Value {
        match self.action {
            Action::Create | Action::Update => merge_owned(base, &self.patch),
            Action::Delete => delete_fields_owned(base, &self.patch),
        }
    }

    /// Read a record from JSON. Unknown action tags are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
