//! Tag text handling for wbtags.
//!
//! Tags arrive as free text typed into the host's tag field, e.g.
//! `"fantasy, magic , ,fantasy"`. Before anything is stored the text goes
//! through two steps:
//!
//! 1. [`split_tag_input`] cuts the raw text on commas. Pieces are left as-is.
//! 2. [`normalize_tags`] trims every piece, drops empties, and removes
//!    duplicates while keeping first-seen order.
//!
//! The result is a [`TagSet`]: ordered, unique (case-sensitive), trimmed and
//! non-empty. Every write into the [`TagStore`](crate::store::TagStore) goes
//! through [`normalize_tags`], so stored data always satisfies that shape.
//!
//! Settings written by the host may contain values that are not strings at
//! all. [`normalize_json_tags`] applies the same rules to a JSON array and
//! drops the non-string entries.

use serde_json::Value;

/// Ordered, unique, trimmed, non-empty tags assigned to one world book.
pub type TagSet = Vec<String>;

/// Delimiter used by the host's tag input field.
pub const TAG_DELIMITER: char = ',';

/// Splits raw tag input on commas. Trimming is left to [`normalize_tags`].
pub fn split_tag_input(text: &str) -> Vec<&str> {
    text.split(TAG_DELIMITER).collect()
}

/// Renders a tag set back into the text shown in the tag input field.
pub fn format_tag_input(tags: &[String]) -> String {
    tags.join(", ")
}

/// Trims, drops empties and de-duplicates, preserving first occurrence.
pub fn normalize_tags<I, S>(raw: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: TagSet = Vec::new();
    for item in raw {
        let tag = item.as_ref().trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

/// Normalizes a JSON value holding a tag list.
///
/// Non-array values yield an empty set. Non-string entries are dropped with a
/// warning.
pub fn normalize_json_tags(value: &Value) -> TagSet {
    let Some(items) = value.as_array() else {
        if !value.is_null() {
            log::warn!("ignoring tag list that is not an array: {}", value);
        }
        return Vec::new();
    };

    let strings = items.iter().filter_map(|item| match item.as_str() {
        Some(s) => Some(s),
        None => {
            log::warn!("dropping non-string tag entry: {}", item);
            None
        }
    });
    normalize_tags(strings)
}
