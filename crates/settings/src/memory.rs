use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::SettingsError;
use crate::store::SettingsStore;

/// In-memory [`SettingsStore`] backed by a [`DashMap`].
///
/// Values are stored verbatim, including empty strings; interpreting an empty
/// value as "unset" is the caller's concern. Intended for tests and embedders
/// that don't need persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: DashMap<String, String>,
}

impl MemoryStore {
    /// Create a new, empty in-memory settings store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
