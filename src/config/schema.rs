//! Configuration schema types
//!
//! This module defines the configuration structure for Curator.

use serde::{Deserialize, Serialize};

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local filesystem
    Local,
    /// In-memory store (tests and embedding)
    Memory,
}

/// Main Curator configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Submission storage configuration
    pub storage: StorageConfig,

    /// Reconciliation settings
    #[serde(default)]
    pub reconciliation: ReconciliationConfig,

    /// Case sink configuration
    #[serde(default)]
    pub sink: SinkConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CuratorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.storage.validate()?;
        self.reconciliation.validate()?;
        self.sink.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (don't hand records to the case sink)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Submission storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend (local or memory)
    pub backend: StorageBackend,

    /// Root under which the batch directories live
    pub root: String,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.root.trim().is_empty() {
            return Err("storage.root cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Reconciliation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// Manifest file name, matched case-insensitively within each batch
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// Objects strictly smaller than this are captured inline during load
    #[serde(default = "default_inline_threshold_bytes")]
    pub inline_threshold_bytes: u64,
}

impl ReconciliationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.manifest_name.trim().is_empty() {
            return Err("reconciliation.manifest_name cannot be empty".to_string());
        }
        if self.manifest_name.contains('/') || self.manifest_name.contains('\\') {
            return Err(format!(
                "reconciliation.manifest_name must be a bare file name, got '{}'",
                self.manifest_name
            ));
        }

        // Inline capture buffers whole objects in memory; cap it at 16 MiB
        if !(1..=16 * 1024 * 1024).contains(&self.inline_threshold_bytes) {
            return Err(format!(
                "reconciliation.inline_threshold_bytes must be between 1 and 16777216, got {}",
                self.inline_threshold_bytes
            ));
        }

        Ok(())
    }
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            manifest_name: default_manifest_name(),
            inline_threshold_bytes: default_inline_threshold_bytes(),
        }
    }
}

/// Case sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Directory the per-dataset case files are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl SinkConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("sink.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, size)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB (used when rotation = size)
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_manifest_name() -> String {
    "manifest.txt".to_string()
}

fn default_inline_threshold_bytes() -> u64 {
    128 * 1024
}

fn default_output_dir() -> String {
    "./cases".to_string()
}

fn default_local_path() -> String {
    "/var/log/curator".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}
