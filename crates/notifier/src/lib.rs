pub mod error;
pub mod notifier;
pub mod settings;

pub use error::NotifyError;
pub use notifier::Notifier;
pub use settings::{KEY_APIKEY, KEY_FROM, KEY_TO, Setting, SettingKind};
