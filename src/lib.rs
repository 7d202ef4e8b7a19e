// Curator - Submission Reconciliation and Case Derivation Tool
// Copyright (c) 2025 Curator Contributors
// Licensed under the MIT License

//! # Curator - Submission Reconciliation and Case Derivation
//!
//! Curator is a reconciliation engine built in Rust that turns append-only
//! submission batches of clinical genomic files into the current set of case
//! records for a dataset.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** flat submission batches and verifying them against their
//!   checksum manifests
//! - **Resolving** the batch history into live objects and tombstones,
//!   honoring zero-byte delete markers
//! - **Classifying** phenopacket-style JSON documents (individual, family,
//!   cohort)
//! - **Deriving** case records with referential integrity over the live view
//!
//! ## Architecture
//!
//! Curator follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (manifest, loader, resolve, classify, derive, sync)
//! - [`adapters`] - External integrations (submission storage, case sink)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use curator::config::load_config;
//! use curator::core::sync::SyncOrchestrator;
//! use curator::domain::DatasetId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("curator.toml")?;
//!
//!     // Create sync orchestrator
//!     let orchestrator = SyncOrchestrator::new(&config)?;
//!
//!     // Execute the run
//!     let dataset_id = DatasetId::new("AG0001")?;
//!     let summary = orchestrator.execute_sync(&dataset_id).await?;
//!
//!     println!("Derived {} cases", summary.case_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Tombstone Semantics
//!
//! A zero-byte entry deletes the object of the same name. Deletion is
//! permanent: reintroducing a tombstoned name in a later batch is a
//! reconciliation error, as is deleting a name that was never introduced.
//!
//! ```rust,no_run
//! use curator::core::resolve::resolve;
//! use curator::domain::{BatchPrefix, FileObject, SubmissionBatch, SubmissionBatchSet};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let batch = SubmissionBatch::new(
//!     BatchPrefix::new("2024-01-05")?,
//!     vec![FileObject::new(
//!         "reads.bam",
//!         1024,
//!         "0123456789abcdef0123456789abcdef",
//!     )],
//! );
//!
//! let view = resolve(&SubmissionBatchSet::new(vec![batch]))?;
//! assert!(view.is_resolved("reads.bam"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Document Classification
//!
//! Classification is permissive: any JSON object carrying a recognizable
//! signal is accepted, and anything else is silently skipped.
//!
//! ```rust
//! use curator::core::classify::classify;
//! use curator::domain::ParsedDocument;
//!
//! let doc = classify(br#"{"subject": {"id": "P1"}}"#);
//! assert!(matches!(doc, Some(ParsedDocument::Individual(_))));
//!
//! assert!(classify(b"{}").is_none());
//! assert!(classify(b"not json").is_none());
//! ```
//!
//! ### Embedding
//!
//! The pipeline runs against any [`adapters::storage::SubmissionStore`], so
//! embedders can drive it entirely in memory:
//!
//! ```rust,no_run
//! use curator::adapters::sink::JsonlCaseSink;
//! use curator::adapters::storage::MemoryStore;
//! use curator::core::loader::LoaderOptions;
//! use curator::core::sync::SyncOrchestrator;
//! use curator::domain::DatasetId;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! store
//!     .put_object(
//!         "submissions",
//!         "2024-01-05",
//!         "manifest.txt",
//!         "0123456789abcdef0123456789abcdef  p1.json\n",
//!     )
//!     .await;
//! store
//!     .put_object(
//!         "submissions",
//!         "2024-01-05",
//!         "p1.json",
//!         r#"{"subject": {"id": "P1"}}"#,
//!     )
//!     .await;
//!
//! let orchestrator = SyncOrchestrator::with_components(
//!     store,
//!     Arc::new(JsonlCaseSink::new("./cases")),
//!     LoaderOptions::default(),
//!     "submissions",
//!     false,
//! );
//!
//! let dataset_id = DatasetId::new("AG0001")?;
//! let batch_set = orchestrator.load_submissions().await?;
//! let cases = orchestrator
//!     .synchronise_into_dataset(&dataset_id, &batch_set)
//!     .await?;
//!
//! println!("Derived {} cases", cases.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Curator uses the [`domain::CuratorError`] type for all errors:
//!
//! ```rust,no_run
//! use curator::domain::{CuratorError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = curator::config::load_config("curator.toml")?;
//!     config.validate().map_err(CuratorError::Configuration)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Curator uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting sync");
//! warn!(batch = "2024-01-05", "Batch holds no data objects");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
