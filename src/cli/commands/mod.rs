//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod inspect;
pub mod sync;
pub mod validate;

use crate::domain::CuratorError;

/// Map a curator error to a process exit code
///
/// 1 = reconciliation failure, 2 = configuration error, 4 = storage error,
/// 5 = fatal.
pub(crate) fn exit_code_for(error: &CuratorError) -> i32 {
    match error {
        CuratorError::Configuration(_) => 2,
        CuratorError::Storage(_) | CuratorError::Io(_) => 4,
        CuratorError::Submission(_) | CuratorError::Resolution(_) | CuratorError::Case(_) => 1,
        CuratorError::Serialization(_) | CuratorError::Other(_) => 5,
    }
}
