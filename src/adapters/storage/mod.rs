//! Submission storage backends
//!
//! Everything Curator knows about where submission bytes live is behind the
//! [`SubmissionStore`] trait: a local-filesystem backend for production use
//! and an in-memory backend for tests and embedding.

pub mod factory;
pub mod local;
pub mod memory;
pub mod traits;

pub use factory::create_submission_store;
pub use local::LocalFsStore;
pub use memory::MemoryStore;
pub use traits::{StorageEntry, SubmissionStore};
