use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStorage};

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryKeyValueStorage::new();
        assert_eq!(storage.get_item("health-storage").unwrap(), None);

        storage.set_item("health-storage", "{}").unwrap();
        storage.set_item("health-storage", "{\"a\":1}").unwrap();
        assert_eq!(
            storage.get_item("health-storage").unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        storage.remove_item("health-storage").unwrap();
        assert_eq!(storage.get_item("health-storage").unwrap(), None);
    }
}
