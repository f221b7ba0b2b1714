//! Active filter commands.
//!
//! Only tags that some world book carries can be selected. Selecting or
//! deselecting several tags at once reports each one that could not be
//! applied instead of failing the whole command.

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::{Result, WbTagsError};
use crate::store::{Persister, TagStore};
use crate::tags::normalize_tags;

fn selection<P: Persister>(store: &TagStore<P>) -> Vec<String> {
    store.active_filter().iter().cloned().collect()
}

pub fn show<P: Persister>(store: &TagStore<P>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_tags(selection(store));
    if store.active_filter().is_empty() {
        result.add_message(CmdMessage::info("No active filter"));
    }
    Ok(result)
}

pub fn add<P: Persister>(store: &mut TagStore<P>, tags: &[String]) -> Result<CmdResult> {
    let tags = normalize_tags(tags);
    if tags.is_empty() {
        return Err(WbTagsError::Api("No tags specified".to_string()));
    }

    let mut result = CmdResult::default();
    let mut added = Vec::new();
    for tag in &tags {
        if store.select_filter_tag(tag) {
            added.push(tag.as_str());
        } else if store.active_filter().contains(tag) {
            result.add_message(CmdMessage::info(format!("'{}' is already selected", tag)));
        } else {
            result.add_message(CmdMessage::warning(format!(
                "No world book is tagged '{}'",
                tag
            )));
        }
    }
    if !added.is_empty() {
        result.messages.insert(
            0,
            CmdMessage::success(format!(
                "Filtering by tag{} [{}]",
                plural(added.len()),
                added.join(", ")
            )),
        );
    }
    Ok(result.with_tags(selection(store)))
}

pub fn remove<P: Persister>(store: &mut TagStore<P>, tags: &[String]) -> Result<CmdResult> {
    let tags = normalize_tags(tags);
    if tags.is_empty() {
        return Err(WbTagsError::Api("No tags specified".to_string()));
    }

    let mut result = CmdResult::default();
    let removed: Vec<&str> = tags
        .iter()
        .filter(|tag| store.deselect_filter_tag(tag))
        .map(String::as_str)
        .collect();
    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Tag{} [{}] not in the filter",
            plural(tags.len()),
            tags.join(", ")
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed tag{} [{}] from the filter",
            plural(removed.len()),
            removed.join(", ")
        )));
    }
    Ok(result.with_tags(selection(store)))
}

pub fn clear<P: Persister>(store: &mut TagStore<P>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.clear_filter() {
        result.add_message(CmdMessage::success("Filter cleared"));
    } else {
        result.add_message(CmdMessage::info("No active filter"));
    }
    Ok(result)
}

pub fn prune<P: Persister>(store: &mut TagStore<P>) -> Result<CmdResult> {
    let pruned = store.prune_stale_filters();
    let mut result = CmdResult::default();
    if pruned.is_empty() {
        result.add_message(CmdMessage::info("Filter is up to date"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed stale tag{} [{}] from the filter",
            plural(pruned.len()),
            pruned.join(", ")
        )));
    }
    Ok(result.with_tags(selection(store)))
}
