//! Core business logic for Curator.
//!
//! This module contains the reconciliation pipeline and its orchestration.
//!
//! # Modules
//!
//! - [`manifest`] - Checksum manifest parsing
//! - [`loader`] - Batch loading and manifest verification
//! - [`resolve`] - Resolution of batches into a live/tombstone view
//! - [`classify`] - Document classification (individual/family/cohort)
//! - [`derive`] - Case derivation with referential integrity
//! - [`sync`] - End-to-end sync orchestration and reporting
//!
//! # Sync Workflow
//!
//! The typical sync workflow:
//!
//! 1. **Load**: List batch directories and verify each against its manifest
//! 2. **Resolve**: Fold the batches in canonical order into a resolved view
//! 3. **Classify**: Recognize phenopacket-style documents among live objects
//! 4. **Derive**: Reduce each document to a case record, checking file
//!    references against the live view
//! 5. **Persist**: Hand the records to the configured case sink
//! 6. **Report**: Generate a sync summary
//!
//! # Example
//!
//! ```rust,no_run
//! use curator::config::load_config;
//! use curator::core::sync::SyncOrchestrator;
//! use curator::domain::DatasetId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("curator.toml")?;
//!
//! // Create sync orchestrator
//! let orchestrator = SyncOrchestrator::new(&config)?;
//!
//! // Execute the run
//! let dataset_id = DatasetId::new("AG0001")?;
//! let summary = orchestrator.execute_sync(&dataset_id).await?;
//!
//! println!("Batches: {}", summary.batch_count);
//! println!("Live objects: {}", summary.resolved_count);
//! println!("Cases: {}", summary.case_count);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod derive;
pub mod loader;
pub mod manifest;
pub mod resolve;
pub mod sync;
