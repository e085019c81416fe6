use serde::{Deserialize, Serialize};

/// Storage key for the recipient address.
pub const KEY_TO: &str = "to";

/// Storage key for the sender address.
pub const KEY_FROM: &str = "from";

/// Storage key for the SendGrid API key.
pub const KEY_APIKEY: &str = "apikey";

/// How a settings field should be rendered by a host configuration UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// Plain text input.
    Text,
    /// Masked input for secrets.
    Password,
}

/// A single configurable field exposed to a host configuration UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    /// Storage key the value is written under.
    pub key: String,
    /// Human-readable title.
    pub title: String,
    /// Human-readable description.
    pub description: String,
    /// Current value, if any.
    pub value: Option<String>,
    /// Rendering hint.
    pub kind: SettingKind,
}
