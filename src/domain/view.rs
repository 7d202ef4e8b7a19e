//! Resolved dataset view
//!
//! The `ResolvedView` is the output of replaying every batch in canonical
//! order: a map of live objects keyed by name, plus a map of tombstones for
//! names that were deleted. A name is in at most one of the two maps at any
//! time, and once a name holds a tombstone it never returns to the live map.

use super::object::FileObject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Net state of a dataset after replaying all submission batches
///
/// Mutation goes through the resolution fold, which enforces the state
/// transitions; read access is open. Both maps are ordered by name so
/// downstream passes iterate deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedView {
    resolved: BTreeMap<String, FileObject>,
    deleted: BTreeMap<String, FileObject>,
}

impl ResolvedView {
    /// Creates an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live objects, keyed and ordered by name
    pub fn resolved(&self) -> &BTreeMap<String, FileObject> {
        &self.resolved
    }

    /// Returns the tombstoned objects, keyed and ordered by name
    pub fn deleted(&self) -> &BTreeMap<String, FileObject> {
        &self.deleted
    }

    /// Looks up a live object by name
    pub fn get_resolved(&self, name: &str) -> Option<&FileObject> {
        self.resolved.get(name)
    }

    /// Returns true if the name currently maps to a live object
    pub fn is_resolved(&self, name: &str) -> bool {
        self.resolved.contains_key(name)
    }

    /// Returns true if the name holds a tombstone
    pub fn is_deleted(&self, name: &str) -> bool {
        self.deleted.contains_key(name)
    }

    /// Returns the number of live objects
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Returns the number of tombstones
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Inserts or replaces a live object. Callers must have checked that the
    /// name does not hold a tombstone.
    pub(crate) fn insert(&mut self, object: FileObject) {
        debug_assert!(!self.deleted.contains_key(object.name()));
        self.resolved.insert(object.name().to_string(), object);
    }

    /// Moves a live object to the tombstone map. Returns false if the name
    /// has no live object to move.
    pub(crate) fn delete(&mut self, name: &str) -> bool {
        match self.resolved.remove(name) {
            Some(object) => {
                self.deleted.insert(name.to_string(), object);
                true
            }
            None => false,
        }
    }
}
