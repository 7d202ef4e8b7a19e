//! Configuration management for Curator.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Curator uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use curator::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("curator.toml")?;
//!
//! // Access configuration sections
//! println!("Submission root: {}", config.storage.root);
//! println!("Manifest name: {}", config.reconciliation.manifest_name);
//! println!("Case output: {}", config.sink.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level, dry run)
//! - [`StorageConfig`] - Submission storage backend and root
//! - [`ReconciliationConfig`] - Manifest name and inline capture threshold
//! - [`SinkConfig`] - Case output directory
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [storage]
//! backend = "local"
//! root = "${CURATOR_SUBMISSION_ROOT}"
//!
//! [reconciliation]
//! manifest_name = "manifest.txt"
//! inline_threshold_bytes = 131072
//!
//! [sink]
//! output_dir = "./cases"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export CURATOR_SUBMISSION_ROOT="/data/submissions"
//! ```
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use curator::config::load_config;
//!
//! # fn example() {
//! match load_config("curator.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CuratorConfig, LoggingConfig, ReconciliationConfig, SinkConfig,
    StorageBackend, StorageConfig,
};
