use std::sync::Arc;

use crate::domain::common::entities::app_errors::CoreError;

/// Durable key-value store holding whole serialized documents, one per key.
///
/// Writes replace the previous value entirely; there is no partial update.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError>;

    fn remove_item(&self, key: &str) -> Result<(), CoreError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        (**self).remove_item(key)
    }
}
