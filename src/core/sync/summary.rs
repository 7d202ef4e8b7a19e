//! Sync summary and reporting
//!
//! This module defines the structure for tracking and reporting sync results.

use crate::domain::ids::DatasetId;
use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Summary of a sync run
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// Unique identifier for this run
    pub run_id: Uuid,

    /// Dataset the cases were synchronised into
    pub dataset_id: DatasetId,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,

    /// Number of non-empty batches loaded
    pub batch_count: usize,

    /// Number of objects across all batches
    pub object_count: usize,

    /// Number of live objects after resolution
    pub resolved_count: usize,

    /// Number of tombstoned objects after resolution
    pub tombstone_count: usize,

    /// Number of derived case records
    pub case_count: usize,

    /// Whether the run skipped sink writes
    pub dry_run: bool,
}

impl SyncSummary {
    /// Create a new empty sync summary
    pub fn new(dataset_id: DatasetId) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            dataset_id,
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            batch_count: 0,
            object_count: 0,
            resolved_count: 0,
            tombstone_count: 0,
            case_count: 0,
            dry_run: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            dataset_id = %self.dataset_id,
            batch_count = self.batch_count,
            object_count = self.object_count,
            resolved_count = self.resolved_count,
            tombstone_count = self.tombstone_count,
            case_count = self.case_count,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Sync completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DatasetId {
        DatasetId::new("AG0001").unwrap()
    }

    #[test]
    fn test_sync_summary_creation() {
        let summary = SyncSummary::new(dataset());

        assert_eq!(summary.dataset_id.as_str(), "AG0001");
        assert_eq!(summary.batch_count, 0);
        assert_eq!(summary.object_count, 0);
        assert_eq!(summary.resolved_count, 0);
        assert_eq!(summary.tombstone_count, 0);
        assert_eq!(summary.case_count, 0);
        assert_eq!(summary.duration, Duration::from_secs(0));
        assert!(!summary.dry_run);
    }

    #[test]
    fn test_sync_summary_with_duration() {
        let summary = SyncSummary::new(dataset()).with_duration(Duration::from_secs(120));
        assert_eq!(summary.duration, Duration::from_secs(120));
    }

    #[test]
    fn test_run_ids_are_unique() {
        let first = SyncSummary::new(dataset());
        let second = SyncSummary::new(dataset());
        assert_ne!(first.run_id, second.run_id);
    }
}
