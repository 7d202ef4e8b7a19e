//! Local filesystem storage backend

use crate::adapters::storage::traits::{StorageEntry, SubmissionStore};
use crate::domain::errors::CuratorError;
use crate::domain::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Storage backend over a local directory tree
///
/// Maps the `root/batchPrefix/fileName` layout directly onto filesystem
/// paths. All I/O goes through tokio's async filesystem API.
#[derive(Debug, Default, Clone)]
pub struct LocalFsStore;

impl LocalFsStore {
    /// Creates a new local filesystem store
    pub fn new() -> Self {
        Self
    }

    fn batch_path(root: &str, prefix: &str) -> PathBuf {
        Path::new(root).join(prefix)
    }
}

#[async_trait]
impl SubmissionStore for LocalFsStore {
    async fn list_batch_prefixes(&self, root: &str) -> Result<Vec<String>> {
        let mut dir = tokio::fs::read_dir(root).await.map_err(|e| {
            CuratorError::Storage(format!("cannot list storage root '{}': {}", root, e))
        })?;

        let mut prefixes = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            CuratorError::Storage(format!("cannot read entry under '{}': {}", root, e))
        })? {
            let file_type = entry.file_type().await.map_err(|e| {
                CuratorError::Storage(format!(
                    "cannot stat '{}': {}",
                    entry.path().display(),
                    e
                ))
            })?;

            // Stray files at the root are not batches
            if file_type.is_dir() {
                prefixes.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        prefixes.sort();
        Ok(prefixes)
    }

    async fn list_entries(&self, root: &str, prefix: &str) -> Result<Vec<StorageEntry>> {
        let batch_path = Self::batch_path(root, prefix);
        let mut dir = tokio::fs::read_dir(&batch_path).await.map_err(|e| {
            CuratorError::Storage(format!(
                "cannot list batch '{}': {}",
                batch_path.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            CuratorError::Storage(format!(
                "cannot read entry under '{}': {}",
                batch_path.display(),
                e
            ))
        })? {
            let metadata = entry.metadata().await.map_err(|e| {
                CuratorError::Storage(format!(
                    "cannot stat '{}': {}",
                    entry.path().display(),
                    e
                ))
            })?;

            entries.push(StorageEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: if metadata.is_dir() { 0 } else { metadata.len() },
                is_dir: metadata.is_dir(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn read_object(&self, root: &str, prefix: &str, name: &str) -> Result<Vec<u8>> {
        let path = Self::batch_path(root, prefix).join(name);
        tokio::fs::read(&path).await.map_err(|e| {
            CuratorError::Storage(format!("cannot read object '{}': {}", path.display(), e))
        })
    }

    fn locator(&self, root: &str, prefix: &str, name: &str) -> String {
        Self::batch_path(root, prefix).join(name).display().to_string()
    }

    fn backend_name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_file(dir: &Path, name: &str, content: &[u8]) {
        tokio::fs::write(dir.join(name), content).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_batch_prefixes_returns_sorted_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        tokio::fs::create_dir(root.join("b2")).await.unwrap();
        tokio::fs::create_dir(root.join("b1")).await.unwrap();
        write_file(root, "stray.txt", b"ignored").await;

        let store = LocalFsStore::new();
        let prefixes = store
            .list_batch_prefixes(root.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(prefixes, vec!["b1", "b2"]);
    }

    #[tokio::test]
    async fn test_list_entries_reports_sizes_and_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let batch = root.join("b1");
        tokio::fs::create_dir(&batch).await.unwrap();
        write_file(&batch, "reads.bam", b"12345").await;
        tokio::fs::create_dir(batch.join("nested")).await.unwrap();

        let store = LocalFsStore::new();
        let entries = store
            .list_entries(root.to_str().unwrap(), "b1")
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "nested");
        assert!(entries[0].is_dir);
        assert_eq!(entries[1].name, "reads.bam");
        assert_eq!(entries[1].size, 5);
        assert!(!entries[1].is_dir);
    }

    #[tokio::test]
    async fn test_read_object_returns_bytes() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let batch = root.join("b1");
        tokio::fs::create_dir(&batch).await.unwrap();
        write_file(&batch, "doc.json", b"{}").await;

        let store = LocalFsStore::new();
        let bytes = store
            .read_object(root.to_str().unwrap(), "b1", "doc.json")
            .await
            .unwrap();

        assert_eq!(bytes, b"{}");
    }

    #[tokio::test]
    async fn test_missing_root_is_a_storage_error() {
        let store = LocalFsStore::new();
        let err = store
            .list_batch_prefixes("/nonexistent/curator-root")
            .await
            .unwrap_err();

        assert!(matches!(err, CuratorError::Storage(_)));
    }

    #[test]
    fn test_locator_joins_path_segments() {
        let store = LocalFsStore::new();
        let locator = store.locator("/data", "b1", "reads.bam");
        assert_eq!(locator, "/data/b1/reads.bam");
    }
}
