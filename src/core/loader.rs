//! Submission batch loading
//!
//! This module lists batch directories under the storage root, checks each
//! listing against the batch's checksum manifest, and assembles the result
//! into a [`SubmissionBatchSet`] ready for resolution.

use crate::adapters::storage::SubmissionStore;
use crate::core::manifest::parse_manifest;
use crate::domain::errors::SubmissionError;
use crate::domain::ids::BatchPrefix;
use crate::domain::object::{FileObject, SubmissionBatch, SubmissionBatchSet};
use crate::domain::{CuratorError, Result};
use std::sync::Arc;

/// Options governing batch loading
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Manifest file name, matched case-insensitively within each batch
    pub manifest_name: String,

    /// Objects strictly smaller than this are captured inline
    pub inline_threshold_bytes: u64,
}

impl LoaderOptions {
    /// Create loader options from the reconciliation config section
    pub fn from_config(config: &crate::config::ReconciliationConfig) -> Self {
        Self {
            manifest_name: config.manifest_name.clone(),
            inline_threshold_bytes: config.inline_threshold_bytes,
        }
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            manifest_name: "manifest.txt".to_string(),
            inline_threshold_bytes: 128 * 1024,
        }
    }
}

/// Loads submission batches from a storage backend
///
/// Every batch is a flat directory holding one checksum manifest and the
/// data objects it lists. Loading is strict: unlisted files, nested
/// directories, and manifest problems abort the whole run.
pub struct BatchLoader {
    store: Arc<dyn SubmissionStore + Send + Sync>,
    options: LoaderOptions,
}

impl BatchLoader {
    /// Create a new batch loader
    pub fn new(store: Arc<dyn SubmissionStore + Send + Sync>, options: LoaderOptions) -> Self {
        Self { store, options }
    }

    /// Load every batch under the given root
    ///
    /// This method:
    /// 1. Lists the batch directories under the root
    /// 2. Loads and verifies each batch against its manifest
    /// 3. Drops batches that carry no data objects
    /// 4. Assembles the rest into a canonical `SubmissionBatchSet`
    ///
    /// # Arguments
    ///
    /// * `root` - Storage root the batch directories live under
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed or any batch violates
    /// the manifest contract
    pub async fn load_batches(&self, root: &str) -> Result<SubmissionBatchSet> {
        let prefixes = self.store.list_batch_prefixes(root).await?;
        tracing::info!(
            root = %root,
            backend = self.store.backend_name(),
            batch_count = prefixes.len(),
            "Listing submission batches"
        );

        let loads = prefixes.iter().map(|prefix| self.load_batch(root, prefix));
        let batches: Vec<SubmissionBatch> = futures::future::try_join_all(loads)
            .await?
            .into_iter()
            .flatten()
            .collect();

        let set = SubmissionBatchSet::new(batches);
        tracing::info!(
            batch_count = set.batch_count(),
            object_count = set.object_count(),
            "Loaded submission batches"
        );
        Ok(set)
    }

    /// Load a single batch, returning `None` when it has no data objects
    async fn load_batch(&self, root: &str, prefix: &str) -> Result<Option<SubmissionBatch>> {
        let prefix = BatchPrefix::new(prefix).map_err(CuratorError::Storage)?;
        let objects = self.load_batch_files(root, &prefix).await?;

        if objects.is_empty() {
            tracing::debug!(batch = %prefix, "Skipping batch with no data objects");
            return Ok(None);
        }

        tracing::debug!(
            batch = %prefix,
            object_count = objects.len(),
            "Loaded batch"
        );
        Ok(Some(SubmissionBatch::new(prefix, objects)))
    }

    /// List one batch, verify it against its manifest, and build its objects
    async fn load_batch_files(&self, root: &str, prefix: &BatchPrefix) -> Result<Vec<FileObject>> {
        let entries = self.store.list_entries(root, prefix.as_str()).await?;

        // Batches are flat; a nested directory is never walked
        if let Some(dir) = entries.iter().find(|e| e.is_dir) {
            return Err(SubmissionError::NestedDirectoryNotSupported {
                batch: prefix.as_str().to_string(),
                name: dir.name.clone(),
            }
            .into());
        }

        let manifest_matches: Vec<&str> = entries
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(&self.options.manifest_name))
            .map(|e| e.name.as_str())
            .collect();

        let manifest_name = match manifest_matches.as_slice() {
            [] => {
                return Err(SubmissionError::ManifestMissing {
                    batch: prefix.as_str().to_string(),
                }
                .into())
            }
            [single] => single.to_string(),
            multiple => {
                return Err(SubmissionError::ManifestAmbiguous {
                    batch: prefix.as_str().to_string(),
                    candidates: multiple.iter().map(|name| name.to_string()).collect(),
                }
                .into())
            }
        };

        let manifest_bytes = self
            .store
            .read_object(root, prefix.as_str(), &manifest_name)
            .await?;
        let manifest = parse_manifest(&manifest_bytes)?;

        let mut objects = Vec::new();
        for entry in &entries {
            if entry.name == manifest_name {
                continue;
            }

            // Manifest entries naming absent files are tolerated; files the
            // manifest doesn't know are not.
            let checksum = manifest.get(&entry.name).ok_or_else(|| {
                SubmissionError::UnlistedFile {
                    batch: prefix.as_str().to_string(),
                    name: entry.name.clone(),
                }
            })?;

            let mut object = FileObject::new(entry.name.as_str(), entry.size, checksum.as_str())
                .with_locator(self.store.locator(root, prefix.as_str(), &entry.name));

            if entry.size < self.options.inline_threshold_bytes {
                let content = self
                    .store
                    .read_object(root, prefix.as_str(), &entry.name)
                    .await?;
                object = object.with_inline_content(content);
            }

            objects.push(object);
        }

        Ok(objects)
    }
}
