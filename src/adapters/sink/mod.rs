//! Case record hand-off
//!
//! The [`CaseSink`] trait is the seam to the external dataset-persistence
//! collaborator. The shipped implementation writes newline-delimited JSON.

pub mod factory;
pub mod jsonl;
pub mod traits;

pub use factory::create_case_sink;
pub use jsonl::JsonlCaseSink;
pub use traits::CaseSink;
