use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{ports::KeyValueStorage, value_objects::PersistedDocument},
};

/// Reads the document stored under `key`.
///
/// A missing document yields `T::default()`. So does a document that cannot be
/// read, decoded, or that was written by a newer `version`; those cases are
/// logged and the stale blob is left for the next write to replace.
pub fn load_document<S, T>(storage: &S, key: &str, version: u32) -> T
where
    S: KeyValueStorage + ?Sized,
    T: DeserializeOwned + Default,
{
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no persisted document, starting empty");
            return T::default();
        }
        Err(e) => {
            warn!(key, "failed to read persisted document: {}", e);
            return T::default();
        }
    };

    match serde_json::from_str::<PersistedDocument<T>>(&raw) {
        Ok(document) if document.version <= version => document.state,
        Ok(document) => {
            warn!(
                key,
                found = document.version,
                supported = version,
                "persisted document version is newer than supported, starting empty"
            );
            T::default()
        }
        Err(e) => {
            warn!(key, "persisted document is corrupt, starting empty: {}", e);
            T::default()
        }
    }
}

/// Serializes `state` and rewrites the whole document under `key`.
pub fn save_document<S, T>(storage: &S, key: &str, version: u32, state: &T) -> Result<(), CoreError>
where
    S: KeyValueStorage + ?Sized,
    T: Serialize,
{
    let document = PersistedDocument { state, version };
    let serialized = serde_json::to_string(&document)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    storage.set_item(key, &serialized)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::domain::storage::ports::MockKeyValueStorage;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn test_load_missing_document_is_default() {
        let mut storage = MockKeyValueStorage::new();
        storage.expect_get_item().returning(|_| Ok(None));

        let counter: Counter = load_document(&storage, "counter", 1);
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_load_corrupt_document_is_default() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get_item()
            .returning(|_| Ok(Some("{not json".to_string())));

        let counter: Counter = load_document(&storage, "counter", 1);
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_load_newer_version_is_default() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get_item()
            .returning(|_| Ok(Some(r#"{"state":{"value":7},"version":9}"#.to_string())));

        let counter: Counter = load_document(&storage, "counter", 1);
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_save_wraps_state_in_envelope() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_set_item()
            .withf(|key, value| {
                key.to_string() == "counter"
                    && value.to_string() == r#"{"state":{"value":7},"version":1}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));

        save_document(&storage, "counter", 1, &Counter { value: 7 }).unwrap();
    }

    #[test]
    fn test_load_reads_saved_state() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get_item()
            .returning(|_| Ok(Some(r#"{"state":{"value":7},"version":1}"#.to_string())));

        let counter: Counter = load_document(&storage, "counter", 1);
        assert_eq!(counter, Counter { value: 7 });
    }
}
