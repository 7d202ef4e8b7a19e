//! In-memory storage backend
//!
//! Bucket-shaped store keyed by `root` and `prefix/name`. Used by tests and
//! by embedders that stage submissions in memory before reconciliation.

use crate::adapters::storage::traits::{StorageEntry, SubmissionStore};
use crate::domain::errors::CuratorError;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

/// Storage backend over in-memory objects
///
/// Prefixes exist only through the objects stored under them, so a root
/// with no objects lists as empty rather than failing. An object name
/// containing `/` surfaces its first segment as a directory entry, matching
/// how a bucket listing reports nested keys.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores object bytes under `root/prefix/name`
    pub async fn put_object(
        &self,
        root: &str,
        prefix: &str,
        name: &str,
        bytes: impl Into<Vec<u8>>,
    ) {
        let mut objects = self.objects.write().await;
        objects
            .entry(root.to_string())
            .or_default()
            .insert(format!("{}/{}", prefix, name), bytes.into());
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn list_batch_prefixes(&self, root: &str) -> Result<Vec<String>> {
        let objects = self.objects.read().await;
        let mut prefixes = BTreeSet::new();

        if let Some(keys) = objects.get(root) {
            for key in keys.keys() {
                if let Some((prefix, _)) = key.split_once('/') {
                    prefixes.insert(prefix.to_string());
                }
            }
        }

        Ok(prefixes.into_iter().collect())
    }

    async fn list_entries(&self, root: &str, prefix: &str) -> Result<Vec<StorageEntry>> {
        let objects = self.objects.read().await;
        let mut entries: BTreeMap<String, StorageEntry> = BTreeMap::new();

        if let Some(keys) = objects.get(root) {
            let wanted = format!("{}/", prefix);
            for (key, bytes) in keys.iter() {
                let rest = match key.strip_prefix(&wanted) {
                    Some(rest) => rest,
                    None => continue,
                };

                match rest.split_once('/') {
                    // Nested key: report its first segment as a directory
                    Some((dir, _)) => {
                        entries.insert(
                            dir.to_string(),
                            StorageEntry {
                                name: dir.to_string(),
                                size: 0,
                                is_dir: true,
                            },
                        );
                    }
                    None => {
                        entries.insert(
                            rest.to_string(),
                            StorageEntry {
                                name: rest.to_string(),
                                size: bytes.len() as u64,
                                is_dir: false,
                            },
                        );
                    }
                }
            }
        }

        Ok(entries.into_values().collect())
    }

    async fn read_object(&self, root: &str, prefix: &str, name: &str) -> Result<Vec<u8>> {
        let objects = self.objects.read().await;
        objects
            .get(root)
            .and_then(|keys| keys.get(&format!("{}/{}", prefix, name)))
            .cloned()
            .ok_or_else(|| {
                CuratorError::Storage(format!(
                    "object not found: {}",
                    self.locator(root, prefix, name)
                ))
            })
    }

    fn locator(&self, root: &str, prefix: &str, name: &str) -> String {
        format!("memory://{}/{}/{}", root, prefix, name)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
