//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers that cross
//! component boundaries. Each type ensures type safety and rejects the
//! degenerate values that would otherwise corrupt map keys or log fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dataset identifier newtype wrapper
///
/// Identifies the dataset a reconciliation run synchronises into. The
/// durable dataset records themselves live with an external persistence
/// collaborator; Curator only threads the identifier through.
///
/// # Examples
///
/// ```
/// use curator::domain::ids::DatasetId;
/// use std::str::FromStr;
///
/// let dataset_id = DatasetId::from_str("AG0001").unwrap();
/// assert_eq!(dataset_id.as_str(), "AG0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(String);

impl DatasetId {
    /// Creates a new DatasetId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Dataset ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the dataset ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Batch prefix newtype wrapper
///
/// Identifies one submission batch under the storage root. The ascending
/// lexicographic order of prefixes is the outer ordering of the resolution
/// fold, so `BatchPrefix` is `Ord` and never empty.
///
/// # Examples
///
/// ```
/// use curator::domain::ids::BatchPrefix;
/// use std::str::FromStr;
///
/// let a = BatchPrefix::from_str("2024-01-05").unwrap();
/// let b = BatchPrefix::from_str("2024-02-19").unwrap();
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BatchPrefix(String);

impl BatchPrefix {
    /// Creates a new BatchPrefix from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is empty or whitespace-only.
    pub fn new(prefix: impl Into<String>) -> Result<Self, String> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() {
            return Err("Batch prefix cannot be empty".to_string());
        }
        Ok(Self(prefix))
    }

    /// Returns the batch prefix as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BatchPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BatchPrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BatchPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
