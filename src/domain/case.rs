//! Case record model
//!
//! A `CaseRecord` is the unit handed outward to the dataset persistence
//! collaborator: one case per recognized clinical document, with the set of
//! live object names the case depends on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A derived case and its validated file dependencies
///
/// Exactly one of `case_id` and `patient_id` is populated: a standalone
/// individual carries a `patient_id` and an empty `case_id`, while a family
/// carries a `case_id` and an empty `patient_id`. Every name in `file_names`
/// was a live object in the view the case was derived against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Family identifier; empty for a standalone individual
    pub case_id: String,
    /// Subject identifier; empty for a family
    pub patient_id: String,
    /// Names of the live objects this case depends on
    pub file_names: BTreeSet<String>,
}

impl CaseRecord {
    /// Creates a case record for a standalone individual
    pub fn individual(patient_id: impl Into<String>, file_names: BTreeSet<String>) -> Self {
        Self {
            case_id: String::new(),
            patient_id: patient_id.into(),
            file_names,
        }
    }

    /// Creates a case record for a family
    pub fn family(case_id: impl Into<String>, file_names: BTreeSet<String>) -> Self {
        Self {
            case_id: case_id.into(),
            patient_id: String::new(),
            file_names,
        }
    }

    /// True if this record was derived from a family document
    pub fn is_family(&self) -> bool {
        !self.case_id.is_empty()
    }
}
