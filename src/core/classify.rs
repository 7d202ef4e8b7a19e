//! Document classification
//!
//! Recognizes resolved object content as one of the clinical document
//! shapes. Most resolved objects are raw data files, so failure to
//! recognize is an expected outcome, never an error. Each shape is tried in
//! fixed order and accepted only when its signal predicate holds, because
//! the permissive decode itself succeeds on almost any JSON object.

use crate::domain::document::{
    CohortDocument, FamilyDocument, IndividualDocument, ParsedDocument,
};
use serde::Deserialize;
use serde_json::Value;

/// Classifies object bytes as Individual, Family, or Cohort
///
/// Tries the shapes in that order and returns the first one that both
/// decodes and carries a signal. Content that is not UTF-8 JSON, or JSON
/// that matches no shape, yields `None`.
pub fn classify(bytes: &[u8]) -> Option<ParsedDocument> {
    let value: Value = serde_json::from_slice(bytes).ok()?;

    if let Ok(doc) = IndividualDocument::deserialize(&value) {
        if doc.has_signal() {
            return Some(ParsedDocument::Individual(doc));
        }
    }

    if let Ok(doc) = FamilyDocument::deserialize(&value) {
        if doc.has_signal() {
            return Some(ParsedDocument::Family(doc));
        }
    }

    if let Ok(doc) = CohortDocument::deserialize(&value) {
        if doc.has_signal() {
            return Some(ParsedDocument::Cohort(doc));
        }
    }

    None
}
