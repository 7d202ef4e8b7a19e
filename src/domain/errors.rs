//! Domain error types
//!
//! This module defines the error hierarchy for Curator. All errors are
//! domain-specific and don't expose third-party types. Reconciliation is
//! fail-fast and all-or-nothing: any violation aborts the in-progress run,
//! and partial state from a failed attempt is discarded, never merged.

use thiserror::Error;

/// Main Curator error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Batch-loading and manifest errors
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Resolution invariant violations
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// Case-derivation errors
    #[error("Case derivation error: {0}")]
    Case(#[from] CaseError),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Batch-loading and manifest errors
///
/// Violations detected while turning a storage location into a
/// `SubmissionBatch`: manifest discovery, manifest decoding, and the
/// one-level directory contract.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No checksum manifest entry found in the batch
    #[error("no checksum manifest found in batch '{batch}'")]
    ManifestMissing { batch: String },

    /// More than one entry matched the manifest name
    #[error("multiple checksum manifests found in batch '{batch}': {}", .candidates.join(", "))]
    ManifestAmbiguous {
        batch: String,
        candidates: Vec<String>,
    },

    /// Manifest text does not follow the fixed two-column checksum layout
    #[error("unsupported manifest format: {reason}")]
    UnsupportedManifestFormat { reason: String },

    /// A content file is not listed in the batch's manifest
    #[error("file '{name}' in batch '{batch}' is not listed in the checksum manifest")]
    UnlistedFile { batch: String, name: String },

    /// Batches are flat; a nested directory is never walked
    #[error("nested directory '{name}' in batch '{batch}' is not supported")]
    NestedDirectoryNotSupported { batch: String, name: String },
}

/// Resolution invariant violations
///
/// Raised by the resolution fold; either variant aborts the whole pass.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// A zero-size entry named an object that was never introduced
    #[error("batch '{batch}' deletes unknown object '{name}'")]
    DeleteOfUnknownObject { batch: String, name: String },

    /// A non-empty entry named an object already moved to a tombstone
    #[error("batch '{batch}' reintroduces deleted object '{name}'")]
    ReintroductionOfDeletedObject { batch: String, name: String },
}

/// Case-derivation errors
///
/// Raised when a classified document cannot be reduced to a `CaseRecord`,
/// or when one of its file references does not resolve to a live object.
#[derive(Debug, Error)]
pub enum CaseError {
    /// The document shape is recognized but carries no case semantics
    #[error("cannot derive a case from document type '{kind}'")]
    UnsupportedDocumentType { kind: String },

    /// Individual document has no subject
    #[error("individual document has no subject")]
    MissingSubject,

    /// Individual document's subject has no identifier
    #[error("individual document's subject has no id")]
    MissingSubjectId,

    /// Family document has no identifier
    #[error("family document has no id")]
    MissingFamilyId,

    /// A file reference points at a deleted or never-seen object
    #[error("file reference '{uri}' does not resolve to a live object (bare name '{name}')")]
    UnresolvableFileReference { uri: String, name: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for CuratorError {
    fn from(err: std::io::Error) -> Self {
        CuratorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CuratorError {
    fn from(err: serde_json::Error) -> Self {
        CuratorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CuratorError {
    fn from(err: toml::de::Error) -> Self {
        CuratorError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curator_error_display() {
        let err = CuratorError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_submission_error_conversion() {
        let sub_err = SubmissionError::ManifestMissing {
            batch: "2024-01-05".to_string(),
        };
        let err: CuratorError = sub_err.into();
        assert!(matches!(err, CuratorError::Submission(_)));
    }

    #[test]
    fn test_resolution_error_conversion() {
        let res_err = ResolutionError::DeleteOfUnknownObject {
            batch: "2024-01-05".to_string(),
            name: "reads.bam".to_string(),
        };
        let err: CuratorError = res_err.into();
        assert!(matches!(err, CuratorError::Resolution(_)));
        assert!(err.to_string().contains("reads.bam"));
    }

    #[test]
    fn test_case_error_conversion() {
        let case_err = CaseError::UnresolvableFileReference {
            uri: "file:///missing.bam".to_string(),
            name: "missing.bam".to_string(),
        };
        let err: CuratorError = case_err.into();
        assert!(matches!(err, CuratorError::Case(_)));
    }

    #[test]
    fn test_manifest_ambiguous_lists_candidates() {
        let err = SubmissionError::ManifestAmbiguous {
            batch: "2024-01-05".to_string(),
            candidates: vec!["manifest.txt".to_string(), "MANIFEST.TXT".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("manifest.txt"));
        assert!(msg.contains("MANIFEST.TXT"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CuratorError = io_err.into();
        assert!(matches!(err, CuratorError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CuratorError = json_err.into();
        assert!(matches!(err, CuratorError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CuratorError = toml_err.into();
        assert!(matches!(err, CuratorError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_curator_error_implements_std_error() {
        let err = CuratorError::Storage("unreachable".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
