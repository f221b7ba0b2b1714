//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for front
//! ends. It dispatches to `commands/*`, resolves which world books exist, and
//! returns structured [`CmdResult`]s. It does no printing.
//!
//! `WbTagsApi<P: Persister>` is generic over the persistence backend:
//! - Production: `WbTagsApi<Debounced<FilePersister>>`
//! - Testing: `WbTagsApi<MemPersister>`

use crate::commands;
use crate::error::Result;
use crate::store::{Persister, TagStore};
use crate::worlds::discover_world_names;
use std::path::PathBuf;

pub struct WbTagsApi<P: Persister> {
    store: TagStore<P>,
    worlds_dir: Option<PathBuf>,
}

impl<P: Persister> WbTagsApi<P> {
    pub fn new(store: TagStore<P>, worlds_dir: Option<PathBuf>) -> Self {
        Self { store, worlds_dir }
    }

    pub fn show_tags(&self, world: &str) -> Result<CmdResult> {
        commands::tags::show(&self.store, world)
    }

    pub fn set_tags(&mut self, world: &str, input: &str) -> Result<CmdResult> {
        commands::tags::set(&mut self.store, world, input)
    }

    pub fn clear_tags(&mut self, world: &str) -> Result<CmdResult> {
        commands::tags::clear(&mut self.store, world)
    }

    pub fn all_tags(&self) -> Result<CmdResult> {
        commands::tags::all(&self.store)
    }

    pub fn show_filter(&self) -> Result<CmdResult> {
        commands::filter::show(&self.store)
    }

    pub fn add_filter_tags(&mut self, tags: &[String]) -> Result<CmdResult> {
        commands::filter::add(&mut self.store, tags)
    }

    pub fn remove_filter_tags(&mut self, tags: &[String]) -> Result<CmdResult> {
        commands::filter::remove(&mut self.store, tags)
    }

    pub fn clear_filter(&mut self) -> Result<CmdResult> {
        commands::filter::clear(&mut self.store)
    }

    pub fn prune_filter(&mut self) -> Result<CmdResult> {
        commands::filter::prune(&mut self.store)
    }

    /// List world books through the filter.
    ///
    /// `worlds` names the candidates explicitly; when empty they come from the
    /// worlds directory, or failing that from the tagged world books.
    pub fn list_worlds(&self, worlds: &[String], tags: &[String]) -> Result<CmdResult> {
        let ids = self.world_ids(worlds)?;
        commands::list::run(&self.store, &ids, tags)
    }

    /// Push coalesced writes to storage.
    pub fn flush(&mut self) -> Result<()> {
        self.store.flush()
    }

    pub fn store(&self) -> &TagStore<P> {
        &self.store
    }

    fn world_ids(&self, explicit: &[String]) -> Result<Vec<String>> {
        if !explicit.is_empty() {
            return Ok(explicit
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect());
        }
        match &self.worlds_dir {
            Some(dir) => discover_world_names(dir),
            None => Ok(self.store.tagged_worlds().map(str::to_string).collect()),
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, WorldTags};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemPersister;
    use std::fs;
    use tempfile::TempDir;

    fn api(worlds_dir: Option<PathBuf>) -> WbTagsApi<MemPersister> {
        WbTagsApi::new(TagStore::new(MemPersister::new()), worlds_dir)
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result.worlds.iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn test_set_and_show_dispatch() {
        let mut api = api(None);
        api.set_tags("Eldoria", "fantasy, magic").unwrap();
        let result = api.show_tags("Eldoria").unwrap();
        assert_eq!(result.worlds[0].tags, vec!["fantasy", "magic"]);
        assert_eq!(api.store().persister().write_count(), 1);
    }

    #[test]
    fn test_list_falls_back_to_tagged_worlds() {
        let mut api = api(None);
        api.set_tags("b", "t").unwrap();
        api.set_tags("a", "t").unwrap();
        let result = api.list_worlds(&[], &[]).unwrap();
        assert_eq!(names(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_list_uses_worlds_dir() {
        let temp = TempDir::new().unwrap();
        for name in ["Eldoria.json", "Mars.json", "Tokyo.json"] {
            fs::write(temp.path().join(name), "{}").unwrap();
        }
        let mut api = api(Some(temp.path().to_path_buf()));
        api.set_tags("Eldoria", "fantasy").unwrap();
        api.set_tags("Tokyo", "modern, fantasy").unwrap();
        api.add_filter_tags(&["fantasy".to_string()]).unwrap();

        let result = api.list_worlds(&[], &[]).unwrap();
        assert_eq!(names(&result), vec!["Eldoria", "Tokyo"]);
    }

    #[test]
    fn test_explicit_worlds_win() {
        let mut api = api(Some(PathBuf::from("/does/not/exist")));
        api.set_tags("Mars", "scifi").unwrap();
        let worlds = vec!["Mars".to_string(), " ".to_string(), "Venus".to_string()];
        let result = api.list_worlds(&worlds, &[]).unwrap();
        assert_eq!(names(&result), vec!["Mars", "Venus"]);
    }

    #[test]
    fn test_missing_worlds_dir_is_error() {
        let api = api(Some(PathBuf::from("/does/not/exist")));
        assert!(api.list_worlds(&[], &[]).is_err());
    }

    #[test]
    fn test_filter_dispatch() {
        let mut api = api(None);
        api.set_tags("W", "x").unwrap();
        api.add_filter_tags(&["x".to_string()]).unwrap();
        assert_eq!(api.show_filter().unwrap().tags, vec!["x"]);
        api.remove_filter_tags(&["x".to_string()]).unwrap();
        assert!(api.show_filter().unwrap().tags.is_empty());
        api.add_filter_tags(&["x".to_string()]).unwrap();
        api.clear_filter().unwrap();
        assert!(api.store().active_filter().is_empty());
        api.prune_filter().unwrap();
        api.clear_tags("W").unwrap();
        assert_eq!(api.all_tags().unwrap().tags, Vec::<String>::new());
    }
}
