mod file_storage;
mod memory_storage;

pub use file_storage::FileKeyValueStorage;
pub use memory_storage::MemoryKeyValueStorage;

use crate::domain::{
    common::{StorageBackend, StorageConfig, entities::app_errors::CoreError},
    storage::ports::KeyValueStorage,
};

/// The storage backend chosen at startup.
#[derive(Debug)]
pub enum StorageAdapter {
    File(FileKeyValueStorage),
    Memory(MemoryKeyValueStorage),
}

impl StorageAdapter {
    pub fn from_config(config: &StorageConfig) -> Result<Self, CoreError> {
        match config.backend {
            StorageBackend::File => Ok(Self::File(FileKeyValueStorage::new(&config.data_dir)?)),
            StorageBackend::Memory => Ok(Self::Memory(MemoryKeyValueStorage::new())),
        }
    }
}

impl KeyValueStorage for StorageAdapter {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self {
            Self::File(storage) => storage.get_item(key),
            Self::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        match self {
            Self::File(storage) => storage.set_item(key, value),
            Self::Memory(storage) => storage.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        match self {
            Self::File(storage) => storage.remove_item(key),
            Self::Memory(storage) => storage.remove_item(key),
        }
    }
}
