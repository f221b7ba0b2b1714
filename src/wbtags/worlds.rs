//! World-book discovery.
//!
//! The host keeps each world book as `<name>.json` inside its worlds
//! directory, and identifies it by `<name>`. This module supplies that list of
//! identifiers to the filter; the store itself never discovers or caches it.

use crate::error::{Result, WbTagsError};
use std::fs;
use std::path::Path;

const WORLD_EXT: &str = "json";

/// Names of all world books in `dir`, sorted case-insensitively.
pub fn discover_world_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(WbTagsError::NotFound(format!(
            "Worlds directory not found: {}",
            dir.display()
        )));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(WbTagsError::Io)? {
        let path = entry.map_err(WbTagsError::Io)?.path();
        if !path.is_file() {
            continue;
        }
        let is_world = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(WORLD_EXT));
        if !is_world {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
    log::debug!("found {} world books in {}", names.len(), dir.display());
    Ok(names)
}
