use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStorage};

/// One `<key>.json` file per key inside `dir`.
///
/// Writes go to a temporary sibling first and are renamed over the target, so
/// a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    dir: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            error!(dir = %dir.display(), "Failed to create data directory: {}", e);
            CoreError::Storage(format!("cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CoreError::Invalid(format!("storage key {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn storage_error(path: &Path, e: std::io::Error) -> CoreError {
    error!(path = %path.display(), "Storage I/O failed: {}", e);
    CoreError::Storage(format!("{}: {}", path.display(), e))
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(&path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp).map_err(|e| storage_error(&tmp, e))?;
        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| storage_error(&path, e))?;

        debug!(key, bytes = value.len(), "document written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileKeyValueStorage::new(dir.path().join("data")).unwrap();

        assert_eq!(storage.get_item("auth-storage").unwrap(), None);
        storage.set_item("auth-storage", "{\"version\":1}").unwrap();

        let reopened = FileKeyValueStorage::new(dir.path().join("data")).unwrap();
        assert_eq!(
            reopened.get_item("auth-storage").unwrap().as_deref(),
            Some("{\"version\":1}")
        );
        assert!(dir.path().join("data/auth-storage.json").exists());
        assert!(!dir.path().join("data/auth-storage.json.tmp").exists());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileKeyValueStorage::new(dir.path()).unwrap();

        storage.remove_item("health-storage").unwrap();
        storage.set_item("health-storage", "{}").unwrap();
        storage.remove_item("health-storage").unwrap();
        assert_eq!(storage.get_item("health-storage").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileKeyValueStorage::new(dir.path()).unwrap();

        assert!(matches!(
            storage.set_item("../escape", "{}"),
            Err(CoreError::Invalid(_))
        ));
    }
}
