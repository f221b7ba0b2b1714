use crate::commands::{plural, CmdMessage, CmdResult, WorldTags};
use crate::error::Result;
use crate::filter;
use crate::model::FilterSelection;
use crate::store::{Persister, TagStore};
use crate::tags::normalize_tags;

/// List world books matching a filter, in the order of `world_ids`.
///
/// With `tags` empty the store's active filter applies; otherwise `tags` is
/// used as a one-off selection and the saved filter is left alone.
pub fn run<P: Persister, S: AsRef<str>>(
    store: &TagStore<P>,
    world_ids: &[S],
    tags: &[String],
) -> Result<CmdResult> {
    let adhoc: FilterSelection = normalize_tags(tags).into_iter().collect();
    let selection = if adhoc.is_empty() {
        store.active_filter()
    } else {
        &adhoc
    };

    let visible: Vec<WorldTags> = filter::apply(world_ids, selection, store)
        .into_iter()
        .map(|name| WorldTags {
            name: name.to_string(),
            tags: store.get_tags(name).to_vec(),
        })
        .collect();

    let mut result = CmdResult::default();
    if world_ids.is_empty() {
        result.add_message(CmdMessage::info("No world books found"));
    } else if !selection.is_empty() {
        let names: Vec<&str> = selection.iter().map(String::as_str).collect();
        result.add_message(CmdMessage::info(format!(
            "{} of {} world book{} match [{}]",
            visible.len(),
            world_ids.len(),
            plural(world_ids.len()),
            names.join(", ")
        )));
    }
    Ok(result.with_worlds(visible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemPersister;

    fn store() -> TagStore<MemPersister> {
        let mut store = TagStore::new(MemPersister::new());
        store.set_tags("W1", ["x", "y"]);
        store.set_tags("W2", ["x"]);
        store.set_tags("W3", ["y"]);
        store
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result.worlds.iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_lists_everything_in_order() {
        let store = store();
        let result = run(&store, &["W3", "W4", "W1", "W2"], &[]).unwrap();
        assert_eq!(names(&result), vec!["W3", "W4", "W1", "W2"]);
        assert!(result.messages.is_empty());
        assert!(result.worlds[1].tags.is_empty());
    }

    #[test]
    fn test_active_filter_applies() {
        let mut store = store();
        store.select_filter_tag("x");
        let result = run(&store, &["W1", "W2", "W3"], &[]).unwrap();
        assert_eq!(names(&result), vec!["W1", "W2"]);
        assert_eq!(result.messages[0].content, "2 of 3 world books match [x]");
    }

    #[test]
    fn test_adhoc_tags_override_active_filter() {
        let mut store = store();
        store.select_filter_tag("x");
        let tags = vec!["y".to_string(), " x ".to_string()];
        let result = run(&store, &["W1", "W2", "W3"], &tags).unwrap();
        assert_eq!(names(&result), vec!["W1"]);
        assert!(store.active_filter().contains("x"));
        assert!(!store.active_filter().contains("y"));
    }

    #[test]
    fn test_no_worlds() {
        let store = store();
        let empty: [&str; 0] = [];
        let result = run(&store, &empty, &[]).unwrap();
        assert!(result.worlds.is_empty());
        assert_eq!(result.messages[0].content, "No world books found");
    }
}
