//! Sync orchestration and reporting
//!
//! This module provides the end-to-end reconciliation run for Curator,
//! including:
//! - Composition of loading, resolution, and case derivation
//! - Hand-off of derived cases to the configured sink
//! - Summary and reporting

pub mod orchestrator;
pub mod summary;

pub use orchestrator::{create_objects_from_files, SyncOrchestrator};
pub use summary::SyncSummary;
