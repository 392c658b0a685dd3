//! Typed facade over [`Mutator`] for documents backed by a Rust type.
//!
//! Patches are any serializable value shaped like part of `T`, typically a
//! struct of `Option` fields with `#[serde(skip_serializing_if = "Option::is_none")]`
//! or a `serde_json::json!` literal.

use crate::config::MutatorConfig;
use crate::error::Result;
use crate::mutator::Mutator;
use crate::notify::ChangeNotice;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A [`Mutator`] whose snapshots deserialize into `T`.
///
/// Conversion happens before the engine is touched, so a patch that fails
/// to serialize leaves history exactly as it was.
#[derive(Debug)]
pub struct TypedMutator<T> {
    inner: Mutator,
    _doc: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> TypedMutator<T> {
    pub fn new(config: MutatorConfig) -> Self {
        Self::from_mutator(Mutator::new(config))
    }

    pub fn from_mutator(inner: Mutator) -> Self {
        Self {
            inner,
            _doc: PhantomData,
        }
    }

    pub fn initialize(&mut self, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.inner.initialize(value);
        Ok(())
    }

    pub fn create<P: Serialize>(&mut self, patch: &P, origin: Option<&str>) -> Result<()> {
        let patch = serde_json::to_value(patch)?;
        self.inner.create(patch, origin);
        Ok(())
    }

    pub fn update<P: Serialize>(&mut self, patch: &P, origin: Option<&str>) -> Result<()> {
        let patch = serde_json::to_value(patch)?;
        self.inner.update(patch, origin);
        Ok(())
    }

    pub fn delete<P: Serialize>(&mut self, patch: &P, origin: Option<&str>) -> Result<()> {
        let patch = serde_json::to_value(patch)?;
        self.inner.delete(patch, origin);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    /// Recompute the current document as a `T`.
    ///
    /// Fails when history has produced a shape `T` cannot represent, for
    /// example after deleting a required field.
    pub fn snapshot(&self) -> Result<T> {
        Ok(serde_json::from_value(self.inner.get_snapshot())?)
    }

    pub fn changes(&self) -> &ChangeNotice {
        self.inner.changes()
    }

    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// The untyped engine underneath.
    pub fn inner(&self) -> &Mutator {
        &self.inner
    }

    pub fn into_inner(self) -> Mutator {
        self.inner
    }
}

impl<T: Serialize + DeserializeOwned> Default for TypedMutator<T> {
    fn default() -> Self {
        Self::new(MutatorConfig::default())
    }
}
