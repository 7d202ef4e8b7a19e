//! Case sink abstraction trait
//!
//! The dataset-persistence collaborator sits behind this trait. Diffing
//! against previously stored state and all durable database writes are its
//! job, not Curator's; the pipeline only hands the derived records across.

use crate::domain::case::CaseRecord;
use crate::domain::ids::DatasetId;
use crate::domain::Result;
use async_trait::async_trait;

/// Receiver of the case records derived by one reconciliation run
#[async_trait]
pub trait CaseSink: Send + Sync {
    /// Hand one run's case records outward
    ///
    /// # Arguments
    ///
    /// * `dataset_id` - Dataset the records belong to
    /// * `cases` - Every record derived by the run
    /// * `dry_run` - If true, skip actual writes (for testing)
    ///
    /// # Errors
    ///
    /// Returns an error if the hand-off fails.
    async fn persist_cases(
        &self,
        dataset_id: &DatasetId,
        cases: &[CaseRecord],
        dry_run: bool,
    ) -> Result<()>;

    /// Get the sink name
    fn sink_name(&self) -> &str;
}
