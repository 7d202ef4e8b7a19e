//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "curator.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Curator configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point storage.root at your submission directory");
                println!("  3. Validate configuration: curator validate-config");
                println!("  4. Inspect the batches: curator inspect");
                println!("  5. Run a sync: curator sync --dataset <id>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Curator Configuration File
# Submission-batch reconciliation and case derivation

[application]
log_level = "info"
dry_run = false

[storage]
backend = "local"  # local | memory
root = "/data/submissions"

[reconciliation]
manifest_name = "manifest.txt"
inline_threshold_bytes = 131072

[sink]
output_dir = "./cases"

[logging]
local_enabled = false
local_path = "/var/log/curator"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Curator Configuration File
# Submission-batch reconciliation and case derivation
#
# This file contains all configuration options with examples and explanations.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (derive cases but don't write to the sink)
dry_run = false

# ============================================================================
# Submission Storage
# ============================================================================
[storage]
# Storage backend: "local" (filesystem) or "memory" (tests and embedding)
backend = "local"

# Root directory the batch directories live under.
# Layout is two-level: root/<batch-prefix>/<file-name>
root = "/data/submissions"

# Environment variables are supported with ${VAR} syntax:
# root = "${CURATOR_SUBMISSION_ROOT}"

# ============================================================================
# Reconciliation Settings
# ============================================================================
[reconciliation]
# Checksum manifest file name, matched case-insensitively in each batch.
# Every batch directory must hold exactly one.
manifest_name = "manifest.txt"

# Objects strictly smaller than this many bytes are read into memory during
# loading so documents can be classified. Larger objects stay referenced by
# locator only. Range: 1 to 16777216.
inline_threshold_bytes = 131072

# ============================================================================
# Case Sink
# ============================================================================
[sink]
# Directory per-dataset case files are written under, one
# <dataset>.cases.jsonl per sync run.
output_dir = "./cases"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (console logging is always on)
local_enabled = false

# Local log file path
local_path = "/var/log/curator"

# Log rotation (daily, hourly or size)
local_rotation = "daily"

# Maximum log file size in MB (used when rotation = size)
local_max_size_mb = 100
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "curator.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "curator.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config_parses() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[storage]"));
        assert!(config.contains("[reconciliation]"));

        let parsed: crate::config::CuratorConfig = toml::from_str(&config).unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_generate_config_with_examples_parses() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# Curator Configuration File"));
        assert!(config.contains("manifest_name"));
        assert!(config.contains("inline_threshold_bytes"));

        let parsed: crate::config::CuratorConfig = toml::from_str(&config).unwrap();
        assert!(parsed.validate().is_ok());
    }
}
