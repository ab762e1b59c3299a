//! In-process session storage for tests and ephemeral runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::validate_key;
use crate::domain::ports::{SessionStorage, SessionStorageError};

/// Session storage that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        validate_key(key)?;
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        validate_key(key)?;
        self.items
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), SessionStorageError> {
        validate_key(key)?;
        self.items.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let storage = MemorySessionStorage::new();
        storage.set_item("vendor", "{}").await.expect("set");
        assert_eq!(storage.get_item("vendor").await.expect("get"), Some("{}".to_owned()));
        storage.remove_item("vendor").await.expect("remove");
        assert_eq!(storage.get_item("vendor").await.expect("get"), None);
    }
}
