//! Submission store factory
//!
//! This module provides factory functions to create storage backends based
//! on configuration.

use crate::adapters::storage::local::LocalFsStore;
use crate::adapters::storage::memory::MemoryStore;
use crate::adapters::storage::traits::SubmissionStore;
use crate::config::schema::{StorageBackend, StorageConfig};
use crate::domain::Result;
use std::sync::Arc;

/// Create a submission store based on the configuration
///
/// This factory function examines the `backend` in the storage section and
/// creates the matching store implementation.
///
/// # Arguments
///
/// * `config` - The storage configuration section
///
/// # Returns
///
/// Returns an Arc-wrapped trait object that implements SubmissionStore
///
/// # Errors
///
/// Returns an error if the store cannot be created
pub fn create_submission_store(
    config: &StorageConfig,
) -> Result<Arc<dyn SubmissionStore + Send + Sync>> {
    match config.backend {
        StorageBackend::Local => {
            tracing::info!(root = %config.root, "Creating local filesystem store");
            Ok(Arc::new(LocalFsStore::new()) as Arc<dyn SubmissionStore + Send + Sync>)
        }
        StorageBackend::Memory => {
            tracing::info!(root = %config.root, "Creating in-memory store");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn SubmissionStore + Send + Sync>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_config(backend: StorageBackend) -> StorageConfig {
        StorageConfig {
            backend,
            root: "/data/submissions".to_string(),
        }
    }

    #[test]
    fn test_creates_local_store() {
        let store = create_submission_store(&storage_config(StorageBackend::Local)).unwrap();
        assert_eq!(store.backend_name(), "local");
    }

    #[test]
    fn test_creates_memory_store() {
        let store = create_submission_store(&storage_config(StorageBackend::Memory)).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }
}
