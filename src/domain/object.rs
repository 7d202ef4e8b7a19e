//! Submission object and batch models
//!
//! This module defines the in-memory shape of a loaded submission: one
//! `FileObject` per directory entry, grouped into a `SubmissionBatch` per
//! batch prefix, collected into a `SubmissionBatchSet` for a whole run.
//! Batches are value objects; once constructed they are never mutated, and
//! their internal ordering is the canonical replay order of the resolution
//! fold.

use super::ids::BatchPrefix;
use serde::{Deserialize, Serialize};

/// A single named object inside one submission batch
///
/// Carries the listing metadata (name, size), the manifest checksum the
/// batch declared for it, and optionally the object bytes when the object
/// was small enough to capture inline at load time.
///
/// # Examples
///
/// ```
/// use curator::domain::object::FileObject;
///
/// let object = FileObject::new("reads.bam", 1024, "d41d8cd98f00b204e9800998ecf8427e")
///     .with_locator("/data/batch-01/reads.bam");
/// assert_eq!(object.name(), "reads.bam");
/// assert!(!object.is_delete_marker());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    name: String,
    size: u64,
    checksum: String,
    inline_content: Option<Vec<u8>>,
    locator: Option<String>,
}

impl FileObject {
    /// Creates a new FileObject from listing metadata and its manifest checksum
    pub fn new(name: impl Into<String>, size: u64, checksum: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            checksum: checksum.into(),
            inline_content: None,
            locator: None,
        }
    }

    /// Attaches the object bytes captured at load time
    pub fn with_inline_content(mut self, content: Vec<u8>) -> Self {
        self.inline_content = Some(content);
        self
    }

    /// Attaches the backend-specific locator the object was loaded from
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// Returns the object name (a bare filename, unique within its batch)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the object size in bytes as reported by the listing
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the manifest checksum declared for this object
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Returns the inline bytes, if the object was captured at load time
    pub fn inline_content(&self) -> Option<&[u8]> {
        self.inline_content.as_deref()
    }

    /// Returns the backend-specific locator, if one was recorded
    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    /// A zero-size object is a delete marker, never content
    pub fn is_delete_marker(&self) -> bool {
        self.size == 0
    }
}

/// One submission batch: a prefix plus its manifest-verified objects
///
/// Objects are sorted by ascending byte order of their names at
/// construction. The manifest entry itself is not a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionBatch {
    prefix: BatchPrefix,
    objects: Vec<FileObject>,
}

impl SubmissionBatch {
    /// Creates a new batch, sorting the objects into canonical name order
    pub fn new(prefix: BatchPrefix, mut objects: Vec<FileObject>) -> Self {
        objects.sort_by(|a, b| a.name.cmp(&b.name));
        Self { prefix, objects }
    }

    /// Returns the batch prefix
    pub fn prefix(&self) -> &BatchPrefix {
        &self.prefix
    }

    /// Returns the objects in canonical name order
    pub fn objects(&self) -> &[FileObject] {
        &self.objects
    }

    /// Returns the number of objects in the batch
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the batch carries no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// All batches loaded for one reconciliation run
///
/// Batches are sorted by ascending prefix at construction, so iterating the
/// set visits every object in the canonical `(prefix, name)` replay order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionBatchSet {
    batches: Vec<SubmissionBatch>,
}

impl SubmissionBatchSet {
    /// Creates a new batch set, sorting the batches into prefix order
    pub fn new(mut batches: Vec<SubmissionBatch>) -> Self {
        batches.sort_by(|a, b| a.prefix.cmp(&b.prefix));
        Self { batches }
    }

    /// Returns the batches in ascending prefix order
    pub fn batches(&self) -> &[SubmissionBatch] {
        &self.batches
    }

    /// Returns the number of batches in the set
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Returns the total number of objects across all batches
    pub fn object_count(&self) -> usize {
        self.batches.iter().map(|b| b.objects.len()).sum()
    }

    /// Returns true if the set carries no batches
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Iterates every object in canonical `(prefix, name)` order
    pub fn iter_objects(&self) -> impl Iterator<Item = (&BatchPrefix, &FileObject)> {
        self.batches
            .iter()
            .flat_map(|batch| batch.objects.iter().map(move |obj| (&batch.prefix, obj)))
    }
}
