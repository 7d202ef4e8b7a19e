//! Case derivation
//!
//! Reduces classified documents to `CaseRecord`s and enforces the
//! referential-integrity guarantee: every file reference inside a case
//! document must name a currently live object in the resolved view. A
//! reference to a deleted or never-seen object aborts the run.

use crate::core::classify::classify;
use crate::domain::case::CaseRecord;
use crate::domain::document::ParsedDocument;
use crate::domain::errors::CaseError;
use crate::domain::view::ResolvedView;
use std::collections::BTreeSet;

/// Derives the case record for one classified document
///
/// # Errors
///
/// - `MissingSubject` / `MissingSubjectId` for an individual document
///   without a usable subject.
/// - `MissingFamilyId` for a family document without its own identifier.
/// - `UnsupportedDocumentType` for a cohort; cohorts never reduce to a case.
/// - `UnresolvableFileReference` when any gathered reference does not name
///   a live object in `view`.
pub fn derive_case(doc: &ParsedDocument, view: &ResolvedView) -> Result<CaseRecord, CaseError> {
    match doc {
        ParsedDocument::Individual(individual) => {
            let subject = individual
                .subject
                .as_ref()
                .ok_or(CaseError::MissingSubject)?;
            if subject.id.is_empty() {
                return Err(CaseError::MissingSubjectId);
            }

            let file_names = resolve_references(&individual.file_uris(), view)?;
            Ok(CaseRecord::individual(subject.id.clone(), file_names))
        }
        ParsedDocument::Family(family) => {
            if family.id.is_empty() {
                return Err(CaseError::MissingFamilyId);
            }

            let file_names = resolve_references(&family.file_uris(), view)?;
            Ok(CaseRecord::family(family.id.clone(), file_names))
        }
        ParsedDocument::Cohort(_) => Err(CaseError::UnsupportedDocumentType {
            kind: doc.kind().to_string(),
        }),
    }
}

/// Derives cases for every recognizable document in the view
///
/// Walks the live objects in name order, classifies each one that carries
/// inline content, and derives a case for every individual or family
/// document. Raw data files, unrecognized JSON, and cohorts are skipped
/// without error.
///
/// # Errors
///
/// Propagates the first derivation failure; partial output is discarded.
pub fn derive_all_cases(view: &ResolvedView) -> Result<Vec<CaseRecord>, CaseError> {
    let mut cases = Vec::new();

    for (name, object) in view.resolved() {
        let content = match object.inline_content() {
            Some(content) => content,
            None => continue,
        };
        let doc = match classify(content) {
            Some(doc) => doc,
            None => continue,
        };

        if let ParsedDocument::Cohort(_) = doc {
            tracing::debug!(object = %name, "Skipping cohort document");
            continue;
        }

        tracing::debug!(object = %name, kind = doc.kind(), "Deriving case");
        cases.push(derive_case(&doc, view)?);
    }

    Ok(cases)
}

/// Checks every reference against the live map and collects the bare names
fn resolve_references(
    uris: &[&str],
    view: &ResolvedView,
) -> Result<BTreeSet<String>, CaseError> {
    let mut names = BTreeSet::new();

    for uri in uris {
        let name = reference_name(uri);
        if !view.is_resolved(name) {
            return Err(CaseError::UnresolvableFileReference {
                uri: uri.to_string(),
                name: name.to_string(),
            });
        }
        names.insert(name.to_string());
    }

    Ok(names)
}

/// Reduces a reference URI to the bare object name it points at
///
/// Strips a leading `file://` or `file:/` scheme and any slashes left over
/// from the authority part; any other URI is used verbatim.
fn reference_name(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("file://")
        .or_else(|| uri.strip_prefix("file:/"));
    match rest {
        Some(rest) => rest.trim_start_matches('/'),
        None => uri,
    }
}
