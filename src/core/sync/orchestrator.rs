//! Sync orchestrator - main coordinator for a reconciliation run
//!
//! This module wires batch loading, resolution, and case derivation together
//! and hands the derived records to the configured case sink.

use crate::adapters::sink::{create_case_sink, CaseSink};
use crate::adapters::storage::{create_submission_store, SubmissionStore};
use crate::config::CuratorConfig;
use crate::core::derive::derive_all_cases;
use crate::core::loader::{BatchLoader, LoaderOptions};
use crate::core::resolve::resolve;
use crate::core::sync::summary::SyncSummary;
use crate::domain::case::CaseRecord;
use crate::domain::ids::DatasetId;
use crate::domain::object::SubmissionBatchSet;
use crate::domain::view::ResolvedView;
use crate::domain::Result;
use std::sync::Arc;
use std::time::Instant;

/// Load every submission batch under the root into a canonical batch set
///
/// Thin composition over [`BatchLoader`] for callers that hold a store but
/// no orchestrator.
///
/// # Arguments
///
/// * `store` - Storage backend holding the batch directories
/// * `root` - Storage root the batch directories live under
/// * `options` - Manifest name and inline capture threshold
///
/// # Errors
///
/// Returns an error if listing fails or any batch violates the manifest
/// contract
pub async fn create_objects_from_files(
    store: Arc<dyn SubmissionStore + Send + Sync>,
    root: &str,
    options: LoaderOptions,
) -> Result<SubmissionBatchSet> {
    BatchLoader::new(store, options).load_batches(root).await
}

/// Sync orchestrator
pub struct SyncOrchestrator {
    sink: Arc<dyn CaseSink + Send + Sync>,
    loader: BatchLoader,
    root: String,
    dry_run: bool,
}

impl SyncOrchestrator {
    /// Create a new sync orchestrator from configuration
    ///
    /// Builds the storage backend and case sink through their factories.
    ///
    /// # Errors
    ///
    /// Returns an error if either factory rejects its configuration section
    pub fn new(config: &CuratorConfig) -> Result<Self> {
        let store = create_submission_store(&config.storage)?;
        let sink = create_case_sink(&config.sink)?;
        let loader = BatchLoader::new(store, LoaderOptions::from_config(&config.reconciliation));

        Ok(Self {
            sink,
            loader,
            root: config.storage.root.clone(),
            dry_run: config.application.dry_run,
        })
    }

    /// Create an orchestrator from pre-built components
    pub fn with_components(
        store: Arc<dyn SubmissionStore + Send + Sync>,
        sink: Arc<dyn CaseSink + Send + Sync>,
        options: LoaderOptions,
        root: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            sink,
            loader: BatchLoader::new(store, options),
            root: root.into(),
            dry_run,
        }
    }

    /// Load every batch under the configured root
    pub async fn load_submissions(&self) -> Result<SubmissionBatchSet> {
        self.loader.load_batches(&self.root).await
    }

    /// Synchronise a prepared batch set into a dataset
    ///
    /// Resolves the batch set, derives case records from the live documents,
    /// and hands them to the case sink. The sink owns diffing and durable
    /// writes.
    ///
    /// # Arguments
    ///
    /// * `dataset_id` - Dataset the derived cases belong to
    /// * `batch_set` - Canonically ordered submission batches
    ///
    /// # Returns
    ///
    /// The derived case records, in live-object name order
    ///
    /// # Errors
    ///
    /// Returns an error if resolution or derivation violates an invariant,
    /// or the sink fails
    pub async fn synchronise_into_dataset(
        &self,
        dataset_id: &DatasetId,
        batch_set: &SubmissionBatchSet,
    ) -> Result<Vec<CaseRecord>> {
        let (_, cases) = self.resolve_and_persist(dataset_id, batch_set).await?;
        Ok(cases)
    }

    /// Execute a full sync run
    ///
    /// This is the main entry point for the sync process. It:
    /// 1. Loads and verifies every batch under the root
    /// 2. Resolves the batches into a live/tombstone view
    /// 3. Derives case records from the live documents
    /// 4. Hands the records to the case sink
    /// 5. Returns a summary of the run
    pub async fn execute_sync(&self, dataset_id: &DatasetId) -> Result<SyncSummary> {
        let start_time = Instant::now();
        let mut summary = SyncSummary::new(dataset_id.clone());
        summary.dry_run = self.dry_run;

        tracing::info!(
            dataset_id = %dataset_id,
            root = %self.root,
            dry_run = self.dry_run,
            "Starting sync run"
        );

        let batch_set = self.load_submissions().await?;
        summary.batch_count = batch_set.batch_count();
        summary.object_count = batch_set.object_count();

        let (view, cases) = self.resolve_and_persist(dataset_id, &batch_set).await?;
        summary.resolved_count = view.resolved_count();
        summary.tombstone_count = view.deleted_count();
        summary.case_count = cases.len();

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Resolve a batch set, derive its cases, and persist them
    async fn resolve_and_persist(
        &self,
        dataset_id: &DatasetId,
        batch_set: &SubmissionBatchSet,
    ) -> Result<(ResolvedView, Vec<CaseRecord>)> {
        let view = resolve(batch_set)?;
        let cases = derive_all_cases(&view)?;

        tracing::info!(
            dataset_id = %dataset_id,
            resolved_count = view.resolved_count(),
            tombstone_count = view.deleted_count(),
            case_count = cases.len(),
            sink = self.sink.sink_name(),
            "Derived cases from resolved view"
        );

        self.sink
            .persist_cases(dataset_id, &cases, self.dry_run)
            .await?;

        Ok((view, cases))
    }
}
