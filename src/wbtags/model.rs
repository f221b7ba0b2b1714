use crate::tags::{normalize_json_tags, TagSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Tags currently chosen as active filters.
pub type FilterSelection = BTreeSet<String>;

/// Everything wbtags persists: per-world tags plus the active filter.
///
/// Serialized as one JSON object with `tagsByFile` and `activeFilterTags`.
/// Loading is lenient: tag lists are re-normalized and empty entries removed,
/// so a hand-edited or host-written file still yields valid sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSettings {
    #[serde(default, deserialize_with = "deserialize_tags_by_file")]
    pub(crate) tags_by_file: BTreeMap<String, TagSet>,

    #[serde(default, deserialize_with = "deserialize_filter")]
    pub(crate) active_filter_tags: FilterSelection,
}

impl TagSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags_by_file(&self) -> &BTreeMap<String, TagSet> {
        &self.tags_by_file
    }

    pub fn active_filter_tags(&self) -> &FilterSelection {
        &self.active_filter_tags
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn deserialize_tags_by_file<'de, D>(deserializer: D) -> Result<BTreeMap<String, TagSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let Value::Object(entries) = raw else {
        if !raw.is_null() {
            log::warn!("ignoring tagsByFile that is not an object");
        }
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .iter()
        .filter_map(|(id, value)| {
            let tags = normalize_json_tags(value);
            (!tags.is_empty()).then(|| (id.clone(), tags))
        })
        .collect())
}

fn deserialize_filter<'de, D>(deserializer: D) -> Result<FilterSelection, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(normalize_json_tags(&raw).into_iter().collect())
}
