//! # Tag Filter
//!
//! Computes which world books are visible for a filter selection.
//!
//! Selection uses AND semantics: a world book matches only when it carries
//! every selected tag. An empty selection means no filtering is active and
//! returns the input list unchanged.
//!
//! The output is always a subsequence of the input ids in their original
//! order. Tag assignment order never affects the result.
//!
//! A selected tag that no world book carries simply matches nothing; it is a
//! valid, if unproductive, filter state.

use crate::model::{FilterSelection, TagSettings};

/// Anything that can answer "which tags does this world book have".
pub trait TagSource {
    /// Tags for `id`, or an empty slice when it has none.
    fn tags_for(&self, id: &str) -> &[String];
}

impl TagSource for TagSettings {
    fn tags_for(&self, id: &str) -> &[String] {
        self.tags_by_file.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Returns the ids from `all_ids` whose tags include every tag in `selection`.
pub fn apply<'a, S, T>(all_ids: &'a [S], selection: &FilterSelection, store: &T) -> Vec<&'a str>
where
    S: AsRef<str>,
    T: TagSource + ?Sized,
{
    all_ids
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| matches(store.tags_for(id), selection))
        .collect()
}

/// True when `tags` is a superset of `selection`.
pub fn matches(tags: &[String], selection: &FilterSelection) -> bool {
    selection.iter().all(|wanted| tags.contains(wanted))
}
