//! External system integrations for Curator.
//!
//! This module provides adapters for the two seams the pipeline crosses:
//!
//! - [`storage`] - Submission storage backends (trait-based)
//! - [`sink`] - Dataset persistence hand-off (trait-based)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with in-memory implementations. Both seams use
//! trait-based abstraction so the core pipeline never touches a concrete
//! backend.
//!
//! # Storage Adapter
//!
//! ```rust,no_run
//! use curator::adapters::storage::{LocalFsStore, SubmissionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LocalFsStore::new();
//! let prefixes = store.list_batch_prefixes("/data/submissions").await?;
//! for prefix in prefixes {
//!     let entries = store.list_entries("/data/submissions", &prefix).await?;
//!     println!("{}: {} entries", prefix, entries.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Case Sink Adapter
//!
//! ```rust,no_run
//! use curator::adapters::sink::{CaseSink, JsonlCaseSink};
//! use curator::domain::DatasetId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sink = JsonlCaseSink::new("./cases");
//! let dataset_id = DatasetId::new("AG0001")?;
//! sink.persist_cases(&dataset_id, &[], false).await?;
//! # Ok(())
//! # }
//! ```

pub mod sink;
pub mod storage;
