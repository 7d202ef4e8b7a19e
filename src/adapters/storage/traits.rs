//! Submission storage abstraction traits
//!
//! This module defines the trait that storage backends must implement for
//! Curator to load submission batches, regardless of whether the bytes live
//! on a local filesystem or in a bucket-shaped store.

use crate::domain::Result;
use async_trait::async_trait;

/// One entry of a batch listing
///
/// Listings are one level deep; a nested directory surfaces as an entry
/// with `is_dir` set and is never walked by the backend. Policy for such
/// entries belongs to the loader, not the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    /// Entry name relative to the batch prefix
    pub name: String,

    /// Size in bytes; zero for directories
    pub size: u64,

    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Storage backend trait for submission batches
///
/// All implementations expose the same two-level layout
/// `root/batchPrefix/fileName` and must return listings in ascending name
/// order, so iteration order never depends on the backend.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// List the immediate children of the root, one per batch
    ///
    /// # Arguments
    ///
    /// * `root` - Storage root the batches live under
    ///
    /// # Returns
    ///
    /// Batch prefixes in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed.
    async fn list_batch_prefixes(&self, root: &str) -> Result<Vec<String>>;

    /// List the entries of one batch, one level deep
    ///
    /// # Arguments
    ///
    /// * `root` - Storage root
    /// * `prefix` - Batch prefix under the root
    ///
    /// # Returns
    ///
    /// Entries in ascending name order.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch location cannot be listed.
    async fn list_entries(&self, root: &str, prefix: &str) -> Result<Vec<StorageEntry>>;

    /// Read the full bytes of one object
    ///
    /// Only called for manifests and for objects under the inline-capture
    /// threshold; large objects are referenced by locator instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the object cannot be read.
    async fn read_object(&self, root: &str, prefix: &str, name: &str) -> Result<Vec<u8>>;

    /// Backend-specific locator for an object, for logs and records
    fn locator(&self, root: &str, prefix: &str, name: &str) -> String;

    /// Get the backend name
    fn backend_name(&self) -> &str;
}
