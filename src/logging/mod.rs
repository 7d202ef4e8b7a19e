//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use curator::logging::init_logging;
//! use curator::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a sync run
///
/// # Example
///
/// ```no_run
/// use curator::log_sync_start;
/// use curator::domain::DatasetId;
///
/// let dataset_id = DatasetId::new("AG0001").unwrap();
/// log_sync_start!(&dataset_id, "/data/submissions");
/// ```
#[macro_export]
macro_rules! log_sync_start {
    ($dataset_id:expr, $root:expr) => {
        tracing::info!(
            dataset_id = %$dataset_id,
            root = %$root,
            "Starting sync"
        );
    };
}

/// Log the completion of a sync run
///
/// # Example
///
/// ```no_run
/// use curator::log_sync_complete;
/// use std::time::Duration;
///
/// let case_count = 42;
/// let duration = Duration::from_secs(10);
/// log_sync_complete!(case_count, duration);
/// ```
#[macro_export]
macro_rules! log_sync_complete {
    ($case_count:expr, $duration:expr) => {
        tracing::info!(
            case_count = $case_count,
            duration_ms = $duration.as_millis(),
            "Sync completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use curator::log_error_with_context;
/// use curator::domain::CuratorError;
///
/// let error = CuratorError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
