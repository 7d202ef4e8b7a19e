//! Newline-delimited JSON case sink

use crate::adapters::sink::traits::CaseSink;
use crate::domain::case::CaseRecord;
use crate::domain::errors::CuratorError;
use crate::domain::ids::DatasetId;
use crate::domain::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Case sink writing one JSON document per line
///
/// Each run produces `<dataset_id>.cases.jsonl` under the configured output
/// directory, replacing any earlier file for the same dataset. This is the
/// hand-off format the downstream persistence service imports from.
#[derive(Debug, Clone)]
pub struct JsonlCaseSink {
    output_dir: PathBuf,
}

impl JsonlCaseSink {
    /// Creates a sink writing under the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the output file for a dataset
    pub fn output_path(&self, dataset_id: &DatasetId) -> PathBuf {
        self.output_dir.join(format!("{}.cases.jsonl", dataset_id))
    }
}

#[async_trait]
impl CaseSink for JsonlCaseSink {
    async fn persist_cases(
        &self,
        dataset_id: &DatasetId,
        cases: &[CaseRecord],
        dry_run: bool,
    ) -> Result<()> {
        if dry_run {
            tracing::info!(
                dataset_id = %dataset_id,
                case_count = cases.len(),
                "Dry run - skipping case export"
            );
            return Ok(());
        }

        tokio::fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            CuratorError::Io(format!(
                "cannot create output directory '{}': {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let mut body = String::new();
        for case in cases {
            let line = serde_json::to_string(case)?;
            body.push_str(&line);
            body.push('\n');
        }

        let path = self.output_path(dataset_id);
        tokio::fs::write(&path, body).await.map_err(|e| {
            CuratorError::Io(format!("cannot write '{}': {}", path.display(), e))
        })?;

        tracing::info!(
            dataset_id = %dataset_id,
            case_count = cases.len(),
            path = %path.display(),
            "Exported case records"
        );
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "jsonl"
    }
}

impl AsRef<Path> for JsonlCaseSink {
    fn as_ref(&self) -> &Path {
        &self.output_dir
    }
}
