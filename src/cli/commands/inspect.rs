//! Inspect command implementation
//!
//! This module implements the `inspect` command for loading and resolving
//! submission batches without writing anything to the case sink.

use super::exit_code_for;
use crate::adapters::storage::create_submission_store;
use crate::config::load_config;
use crate::core::loader::LoaderOptions;
use crate::core::resolve::resolve;
use crate::core::sync::create_objects_from_files;
use clap::Args;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {}

impl InspectArgs {
    /// Execute the inspect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Inspecting submission batches");

        println!("📊 Submission Inspection");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Create storage backend
        let store = match create_submission_store(&config.storage) {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to create storage backend");
                println!("   Error: {e}");
                return Ok(4); // Storage error exit code
            }
        };

        // Load batches
        let options = LoaderOptions::from_config(&config.reconciliation);
        let batch_set = match create_objects_from_files(store, &config.storage.root, options).await
        {
            Ok(set) => set,
            Err(e) => {
                println!("❌ Failed to load submission batches");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if batch_set.is_empty() {
            println!("No submission batches found under {}", config.storage.root);
            return Ok(0);
        }

        // Display per-batch object counts
        println!("Found {} batch(es):", batch_set.batch_count());
        println!();
        println!("{:<30} {:<10}", "Batch", "Objects");
        println!("{}", "-".repeat(40));
        for batch in batch_set.batches() {
            println!("{:<30} {:<10}", batch.prefix().as_str(), batch.object_count());
        }
        println!();

        // Resolve into the live/tombstone view
        let view = match resolve(&batch_set) {
            Ok(v) => v,
            Err(e) => {
                println!("❌ Resolution failed");
                println!("   Error: {e}");
                return Ok(1); // Reconciliation failure exit code
            }
        };

        println!("Resolved view:");
        println!("  Live objects: {}", view.resolved_count());
        println!("  Tombstones: {}", view.deleted_count());
        println!();

        Ok(0)
    }
}
