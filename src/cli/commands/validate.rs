//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Curator configuration file.

use crate::config::load_config;
use crate::config::schema::StorageBackend;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (load_config validates on the way in)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);

        match config.storage.backend {
            StorageBackend::Local => {
                println!("  Storage Backend: local filesystem");
            }
            StorageBackend::Memory => {
                println!("  Storage Backend: in-memory");
            }
        }
        println!("  Storage Root: {}", config.storage.root);

        println!("  Manifest Name: {}", config.reconciliation.manifest_name);
        println!(
            "  Inline Threshold: {} bytes",
            config.reconciliation.inline_threshold_bytes
        );
        println!("  Case Output: {}", config.sink.output_dir);
        println!();

        Ok(0)
    }
}
