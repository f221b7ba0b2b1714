use super::Persister;
use crate::error::Result;
use crate::filter::{self, TagSource};
use crate::model::{FilterSelection, TagSettings};
use crate::tags::normalize_tags;
use std::collections::BTreeSet;

/// Keyed tag storage for world books, plus the active filter selection.
///
/// A world book that is absent from the mapping has no tags; writing an empty
/// set removes the key instead of storing it. Selected filter tags always
/// refer to tags some world book carries: selecting an unknown tag is refused
/// and stale selections are pruned whenever the mapping changes.
pub struct TagStore<P: Persister> {
    settings: TagSettings,
    persister: P,
}

impl<P: Persister> TagStore<P> {
    /// Create an empty store.
    pub fn new(persister: P) -> Self {
        Self::with_settings(TagSettings::default(), persister)
    }

    /// Create a store over previously saved settings.
    ///
    /// Stale filter selections are pruned in memory; nothing is written until
    /// the next mutation.
    pub fn with_settings(settings: TagSettings, persister: P) -> Self {
        let mut store = Self {
            settings,
            persister,
        };
        let pruned = store.prune_stale_in_memory();
        if !pruned.is_empty() {
            log::debug!("dropped stale filter tags on load: {:?}", pruned);
        }
        store
    }

    /// Tags for `id`, or an empty slice if it has none.
    pub fn get_tags(&self, id: &str) -> &[String] {
        self.settings.tags_for(id)
    }

    /// Replace the tags of `id` with the normalized form of `raw`.
    ///
    /// Entries are trimmed, empties dropped and duplicates removed (first
    /// occurrence wins). An empty result removes `id` from the mapping. The
    /// persister is called exactly once; a failed write is logged, not
    /// returned.
    pub fn set_tags<I, S>(&mut self, id: &str, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = normalize_tags(raw);
        if tags.is_empty() {
            if self.settings.tags_by_file.remove(id).is_some() {
                log::debug!("cleared tags for {}", id);
            }
        } else {
            log::debug!("set tags for {}: {:?}", id, tags);
            self.settings.tags_by_file.insert(id.to_string(), tags);
        }

        let pruned = self.prune_stale_in_memory();
        if !pruned.is_empty() {
            log::debug!("dropped stale filter tags: {:?}", pruned);
        }
        self.persist();
    }

    /// Remove every tag from `id`.
    pub fn clear_tags(&mut self, id: &str) {
        self.set_tags(id, std::iter::empty::<&str>());
    }

    /// Every distinct tag across all world books, sorted.
    pub fn all_unique_tags(&self) -> Vec<String> {
        self.tag_universe().into_iter().map(str::to_string).collect()
    }

    /// Number of world books with at least one tag.
    pub fn len(&self) -> usize {
        self.settings.tags_by_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.tags_by_file.is_empty()
    }

    /// Whether `id` has an entry in the mapping.
    pub fn contains(&self, id: &str) -> bool {
        self.settings.tags_by_file.contains_key(id)
    }

    /// Ids of all tagged world books, sorted.
    pub fn tagged_worlds(&self) -> impl Iterator<Item = &str> {
        self.settings.tags_by_file.keys().map(String::as_str)
    }

    pub fn active_filter(&self) -> &FilterSelection {
        &self.settings.active_filter_tags
    }

    /// Add `tag` to the active filter.
    ///
    /// Returns false (and changes nothing) when the tag is already selected
    /// or no world book carries it.
    pub fn select_filter_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if !self.tag_universe().contains(tag) {
            log::debug!("refusing to select unknown filter tag '{}'", tag);
            return false;
        }
        if !self.settings.active_filter_tags.insert(tag.to_string()) {
            return false;
        }
        self.persist();
        true
    }

    /// Remove `tag` from the active filter. Returns whether it was selected.
    pub fn deselect_filter_tag(&mut self, tag: &str) -> bool {
        if !self.settings.active_filter_tags.remove(tag.trim()) {
            return false;
        }
        self.persist();
        true
    }

    /// Deselect everything. Returns whether anything was selected.
    pub fn clear_filter(&mut self) -> bool {
        if self.settings.active_filter_tags.is_empty() {
            return false;
        }
        self.settings.active_filter_tags.clear();
        self.persist();
        true
    }

    /// Drop selected tags that no world book carries any more.
    pub fn prune_stale_filters(&mut self) -> Vec<String> {
        let pruned = self.prune_stale_in_memory();
        if !pruned.is_empty() {
            self.persist();
        }
        pruned
    }

    /// The subset of `all_ids` matching the active filter, in input order.
    pub fn visible_worlds<'a, S: AsRef<str>>(&self, all_ids: &'a [S]) -> Vec<&'a str> {
        filter::apply(all_ids, &self.settings.active_filter_tags, &self.settings)
    }

    pub fn settings(&self) -> &TagSettings {
        &self.settings
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    pub fn persister_mut(&mut self) -> &mut P {
        &mut self.persister
    }

    /// Push any coalesced write through to storage.
    pub fn flush(&mut self) -> Result<()> {
        self.persister.flush()
    }

    // Recomputed on every call; the mapping is small.
    fn tag_universe(&self) -> BTreeSet<&str> {
        self.settings
            .tags_by_file
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    fn prune_stale_in_memory(&mut self) -> Vec<String> {
        if self.settings.active_filter_tags.is_empty() {
            return Vec::new();
        }
        let universe: BTreeSet<String> = self.all_unique_tags().into_iter().collect();
        let stale: Vec<String> = self
            .settings
            .active_filter_tags
            .difference(&universe)
            .cloned()
            .collect();
        for tag in &stale {
            self.settings.active_filter_tags.remove(tag);
        }
        stale
    }

    fn persist(&mut self) {
        if let Err(e) = self.persister.persist(&self.settings) {
            log::warn!("failed to save tag settings: {}", e);
        }
    }
}

impl<P: Persister> TagSource for TagStore<P> {
    fn tags_for(&self, id: &str) -> &[String] {
        self.get_tags(id)
    }
}
