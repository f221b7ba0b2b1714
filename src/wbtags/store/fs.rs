use super::Persister;
use crate::error::{Result, WbTagsError};
use crate::model::TagSettings;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Saves settings as pretty JSON at a fixed path.
///
/// Writes go to a temp file next to the target and are renamed into place,
/// so a crash never leaves a half-written settings file.
#[derive(Debug, Clone)]
pub struct FilePersister {
    path: PathBuf,
}

impl FilePersister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings from this persister's path.
    pub fn load(&self) -> Result<TagSettings> {
        load_settings(&self.path)
    }
}

impl Persister for FilePersister {
    fn persist(&mut self, settings: &TagSettings) -> Result<()> {
        save_settings(&self.path, settings)
    }
}

/// Read settings from `path`, returning defaults when the file is missing.
pub fn load_settings(path: &Path) -> Result<TagSettings> {
    if !path.exists() {
        return Ok(TagSettings::default());
    }
    let content = fs::read_to_string(path).map_err(WbTagsError::Io)?;
    if content.trim().is_empty() {
        return Ok(TagSettings::default());
    }
    TagSettings::from_json(&content).map_err(WbTagsError::Serialization)
}

/// Atomically write settings to `path`, creating parent directories.
pub fn save_settings(path: &Path, settings: &TagSettings) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(WbTagsError::Io)?;
    }

    let content = settings.to_json().map_err(WbTagsError::Serialization)?;
    let tmp_file = dir.join(format!(".wbtags-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp_file, content).map_err(WbTagsError::Io)?;
    if let Err(e) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(WbTagsError::Io(e));
    }
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TagStore;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_settings(&temp.path().join("nope.json")).unwrap();
        assert_eq!(settings, TagSettings::default());
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_settings(&path).unwrap(), TagSettings::default());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(WbTagsError::Serialization(_))
        ));
    }

    #[test]
    fn test_store_writes_through_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.json");

        let mut store = TagStore::new(FilePersister::new(&path));
        store.set_tags("Eldoria.json", ["fantasy", " magic "]);

        let loaded = FilePersister::new(&path).load().unwrap();
        assert_eq!(
            loaded.tags_by_file()["Eldoria.json"],
            vec!["fantasy", "magic"]
        );
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        let mut persister = FilePersister::new(&path);
        persister.persist(&TagSettings::default()).unwrap();
        persister.persist(&TagSettings::default()).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["settings.json"]);
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let path = temp.path().join("settings.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        assert!(matches!(
            save_settings(&path, &TagSettings::default()),
            Err(WbTagsError::Io(_))
        ));
        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["settings.json"]);
    }

    #[test]
    fn test_round_trip_through_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");

        let mut store = TagStore::new(FilePersister::new(&path));
        store.set_tags("A", ["x", "y"]);
        store.set_tags("B", ["y"]);
        assert!(store.select_filter_tag("y"));

        let reloaded =
            TagStore::with_settings(load_settings(&path).unwrap(), FilePersister::new(&path));
        assert_eq!(reloaded.settings(), store.settings());
    }
}
