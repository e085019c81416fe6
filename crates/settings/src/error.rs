use thiserror::Error;

/// Errors that can occur while reading or writing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The underlying store failed to read or write.
    #[error("settings storage error: {0}")]
    Storage(String),
}
