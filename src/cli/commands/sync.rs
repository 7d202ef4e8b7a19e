//! Sync command implementation
//!
//! This module implements the `sync` command for reconciling submission
//! batches into a dataset's case records.

use super::exit_code_for;
use crate::config::load_config;
use crate::core::sync::SyncOrchestrator;
use crate::domain::ids::DatasetId;
use clap::Args;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Dataset to synchronise the derived cases into
    #[arg(short, long)]
    pub dataset: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - derive cases without writing to the sink
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting sync command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply dry-run flag from CLI
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        // Validate the dataset identifier before touching storage
        let dataset_id = match DatasetId::new(self.dataset.as_str()) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("Invalid dataset id: {e}");
                return Ok(2);
            }
        };

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no cases will be written");
            println!("🔍 DRY RUN MODE - No cases will be written to the sink");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.application.dry_run {
            println!("Sync Configuration:");
            println!("  Dataset: {}", dataset_id);
            println!("  Storage root: {}", config.storage.root);
            println!("  Manifest name: {}", config.reconciliation.manifest_name);
            println!("  Case output: {}", config.sink.output_dir);
            println!();
            print!("Proceed with sync? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Sync cancelled.");
                return Ok(0);
            }
        }

        // Create sync orchestrator
        tracing::info!("Creating sync orchestrator");
        let orchestrator = match SyncOrchestrator::new(&config) {
            Ok(o) => o,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create sync orchestrator");
                eprintln!("Failed to initialize sync: {e}");
                return Ok(4); // Storage error exit code
            }
        };

        // Execute sync
        println!("🚀 Starting sync...");
        println!();

        let summary = match orchestrator.execute_sync(&dataset_id).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Sync failed");
                eprintln!("Sync failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        // Display summary
        println!();
        println!("📊 Sync Summary:");
        println!("  Run ID: {}", summary.run_id);
        println!("  Dataset: {}", summary.dataset_id);
        println!("  Batches: {}", summary.batch_count);
        println!("  Objects: {}", summary.object_count);
        println!("  Live objects: {}", summary.resolved_count);
        println!("  Tombstones: {}", summary.tombstone_count);
        println!("  Cases: {}", summary.case_count);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        if summary.dry_run {
            println!("  Mode: dry run (sink writes skipped)");
        }
        println!();
        println!("✅ Sync completed successfully!");

        Ok(0)
    }
}
