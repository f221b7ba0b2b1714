//! Per-world-book tag commands.
//!
//! - `show`: the tags of one world book
//! - `set`: replace its tags from comma-separated input
//! - `clear`: remove all of its tags
//! - `all`: every distinct tag, for building a filter menu

use crate::commands::{plural, CmdMessage, CmdResult, WorldTags};
use crate::error::{Result, WbTagsError};
use crate::model::FilterSelection;
use crate::store::{Persister, TagStore};
use crate::tags::{format_tag_input, split_tag_input};

fn check_world(world: &str) -> Result<&str> {
    let world = world.trim();
    if world.is_empty() {
        return Err(WbTagsError::Api(
            "World book name cannot be empty".to_string(),
        ));
    }
    Ok(world)
}

fn world_tags<P: Persister>(store: &TagStore<P>, world: &str) -> WorldTags {
    WorldTags {
        name: world.to_string(),
        tags: store.get_tags(world).to_vec(),
    }
}

pub fn show<P: Persister>(store: &TagStore<P>, world: &str) -> Result<CmdResult> {
    let world = check_world(world)?;
    let mut result = CmdResult::default().with_worlds(vec![world_tags(store, world)]);
    if store.get_tags(world).is_empty() {
        result.add_message(CmdMessage::info(format!("'{}' has no tags", world)));
    }
    Ok(result)
}

/// Replace the tags of `world` with the comma-separated `input`.
pub fn set<P: Persister>(store: &mut TagStore<P>, world: &str, input: &str) -> Result<CmdResult> {
    let world = check_world(world)?;
    let before = store.active_filter().clone();
    store.set_tags(world, split_tag_input(input));

    let mut result = CmdResult::default().with_worlds(vec![world_tags(store, world)]);
    let tags = store.get_tags(world);
    if tags.is_empty() {
        result.add_message(CmdMessage::success(format!("Cleared tags on '{}'", world)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Tagged '{}' with [{}]",
            world,
            format_tag_input(tags)
        )));
    }
    add_pruned_warning(&mut result, &before, store);
    Ok(result)
}

pub fn clear<P: Persister>(store: &mut TagStore<P>, world: &str) -> Result<CmdResult> {
    let world = check_world(world)?;
    let mut result = CmdResult::default();
    if !store.contains(world) {
        result.add_message(CmdMessage::info(format!("'{}' has no tags", world)));
        return Ok(result);
    }

    let before = store.active_filter().clone();
    store.clear_tags(world);
    result.add_message(CmdMessage::success(format!("Cleared tags on '{}'", world)));
    add_pruned_warning(&mut result, &before, store);
    Ok(result)
}

pub fn all<P: Persister>(store: &TagStore<P>) -> Result<CmdResult> {
    let tags = store.all_unique_tags();
    let mut result = CmdResult::default();
    if tags.is_empty() {
        result.add_message(CmdMessage::info("No tags defined"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} tag{} across {} world book{}",
            tags.len(),
            plural(tags.len()),
            store.len(),
            plural(store.len())
        )));
    }
    Ok(result.with_tags(tags))
}

fn add_pruned_warning<P: Persister>(
    result: &mut CmdResult,
    before: &FilterSelection,
    store: &TagStore<P>,
) {
    let dropped: Vec<&str> = before
        .difference(store.active_filter())
        .map(String::as_str)
        .collect();
    if !dropped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Removed no-longer-used tag{} from the filter: {}",
            plural(dropped.len()),
            dropped.join(", ")
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemPersister;

    fn store() -> TagStore<MemPersister> {
        TagStore::new(MemPersister::new())
    }

    #[test]
    fn test_set_from_comma_input() {
        let mut store = store();
        let result = set(&mut store, "Eldoria", "fantasy, magic ,, fantasy").unwrap();
        assert_eq!(store.get_tags("Eldoria"), ["fantasy", "magic"]);
        assert_eq!(result.worlds[0].tags, vec!["fantasy", "magic"]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("fantasy, magic"));
    }

    #[test]
    fn test_set_empty_input_clears() {
        let mut store = store();
        set(&mut store, "Eldoria", "fantasy").unwrap();
        let result = set(&mut store, "Eldoria", " , ").unwrap();
        assert!(!store.contains("Eldoria"));
        assert!(result.messages[0].content.contains("Cleared"));
    }

    #[test]
    fn test_empty_world_name_rejected() {
        let mut store = store();
        assert!(set(&mut store, "  ", "a").is_err());
        assert!(show(&store, "").is_err());
        assert!(clear(&mut store, "").is_err());
        assert_eq!(store.persister().write_count(), 0);
    }

    #[test]
    fn test_world_name_is_trimmed() {
        let mut store = store();
        set(&mut store, " Eldoria ", "a").unwrap();
        assert!(store.contains("Eldoria"));
    }

    #[test]
    fn test_show_untagged() {
        let store = store();
        let result = show(&store, "Nowhere").unwrap();
        assert!(result.worlds[0].tags.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn test_clear_untagged_does_not_write() {
        let mut store = store();
        clear(&mut store, "Nowhere").unwrap();
        assert_eq!(store.persister().write_count(), 0);
    }

    #[test]
    fn test_clear_warns_about_pruned_filter() {
        let mut store = store();
        set(&mut store, "A", "solo, shared").unwrap();
        set(&mut store, "B", "shared").unwrap();
        store.select_filter_tag("solo");
        store.select_filter_tag("shared");

        let result = clear(&mut store, "A").unwrap();
        let warning = result
            .messages
            .iter()
            .find(|m| m.level == MessageLevel::Warning)
            .unwrap();
        assert!(warning.content.contains("solo"));
        assert!(!warning.content.contains("shared"));
    }

    #[test]
    fn test_all_tags() {
        let mut store = store();
        set(&mut store, "W1", "b").unwrap();
        set(&mut store, "W2", "a, b").unwrap();
        set(&mut store, "W3", "c").unwrap();
        let result = all(&store).unwrap();
        assert_eq!(result.tags, vec!["a", "b", "c"]);
        assert_eq!(result.messages[0].content, "3 tags across 3 world books");
    }

    #[test]
    fn test_all_tags_empty() {
        let result = all(&store()).unwrap();
        assert!(result.tags.is_empty());
        assert_eq!(result.messages[0].content, "No tags defined");
    }
}
