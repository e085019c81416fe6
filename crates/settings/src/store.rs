use async_trait::async_trait;

use crate::error::SettingsError;

/// Persistent string key-value store backing the notifier's configuration.
///
/// Implementors provide the actual storage mechanism (host plugin storage, a
/// file, a database); the notifier relies only on this get/set contract.
/// Implementations must be `Send + Sync` and safe for concurrent access.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Get the value for a key. Returns `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Set a value, overwriting any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}
