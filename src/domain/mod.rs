//! Domain models and types for Curator.
//!
//! This module contains the core domain models, types, and business rules for
//! the reconciliation pipeline. All types follow the newtype and explicit-error
//! conventions used across the codebase.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DatasetId`], [`BatchPrefix`])
//! - **Submission models** ([`FileObject`], [`SubmissionBatch`], [`SubmissionBatchSet`])
//! - **Resolution state** ([`ResolvedView`])
//! - **Clinical documents** ([`ParsedDocument`] and its shapes)
//! - **Derived output** ([`CaseRecord`])
//! - **Error types** ([`CuratorError`] and its per-stage sub-errors)
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Curator uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use curator::domain::{BatchPrefix, DatasetId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset_id = DatasetId::new("AG0001")?;
//! let prefix = BatchPrefix::new("2024-01-05")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: DatasetId = prefix;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`] over [`CuratorError`], which
//! wraps the per-stage error enums:
//!
//! ```rust
//! use curator::domain::{CuratorError, Result, SubmissionError};
//!
//! fn example() -> Result<()> {
//!     // Sub-errors convert automatically via the ? operator
//!     Err(SubmissionError::ManifestMissing {
//!         batch: "2024-01-05".to_string(),
//!     })?
//! }
//! ```

pub mod case;
pub mod document;
pub mod errors;
pub mod ids;
pub mod object;
pub mod result;
pub mod view;

// Re-export commonly used types for convenience
pub use case::CaseRecord;
pub use document::{
    Biosample, CohortDocument, DocumentFile, FamilyDocument, IndividualDocument, ParsedDocument,
    Pedigree, Subject,
};
pub use errors::{CaseError, CuratorError, ResolutionError, SubmissionError};
pub use ids::{BatchPrefix, DatasetId};
pub use object::{FileObject, SubmissionBatch, SubmissionBatchSet};
pub use result::Result;
pub use view::ResolvedView;
