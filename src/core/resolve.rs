//! Batch resolution engine
//!
//! Folds the canonically ordered object stream of a `SubmissionBatchSet`
//! into a `ResolvedView`. The fold is strictly sequential: ascending batch
//! prefix, then ascending object name, is the only tie-break between
//! batches that touch the same name. Any violation aborts the whole pass;
//! there is no partial view to salvage.

use crate::domain::errors::ResolutionError;
use crate::domain::ids::BatchPrefix;
use crate::domain::object::{FileObject, SubmissionBatchSet};
use crate::domain::view::ResolvedView;

/// Replays every batch in canonical order into a fresh view
///
/// # Errors
///
/// Returns the first invariant violation encountered; the in-progress view
/// is discarded.
pub fn resolve(batch_set: &SubmissionBatchSet) -> Result<ResolvedView, ResolutionError> {
    let mut view = ResolvedView::new();

    for (prefix, object) in batch_set.iter_objects() {
        apply_object(&mut view, prefix, object)?;
    }

    tracing::debug!(
        resolved = view.resolved_count(),
        deleted = view.deleted_count(),
        "Resolved batch set"
    );

    Ok(view)
}

/// Applies one object to the view, in stream order
///
/// A zero-size object is a delete marker: the prior live object moves to
/// the tombstone map and the marker's payload is discarded. A non-empty
/// object becomes the live version of its name unless the name already
/// holds a tombstone.
///
/// # Errors
///
/// - `DeleteOfUnknownObject` when a marker names an object with no live
///   version, including a second marker for an already deleted name.
/// - `ReintroductionOfDeletedObject` when a non-empty object names a
///   tombstone. Deletion is irreversible within a pass.
pub fn apply_object(
    view: &mut ResolvedView,
    prefix: &BatchPrefix,
    object: &FileObject,
) -> Result<(), ResolutionError> {
    if object.is_delete_marker() {
        if !view.delete(object.name()) {
            return Err(ResolutionError::DeleteOfUnknownObject {
                batch: prefix.to_string(),
                name: object.name().to_string(),
            });
        }
        return Ok(());
    }

    if view.is_deleted(object.name()) {
        return Err(ResolutionError::ReintroductionOfDeletedObject {
            batch: prefix.to_string(),
            name: object.name().to_string(),
        });
    }

    view.insert(object.clone());
    Ok(())
}
