pub mod error;
pub mod memory;
pub mod store;

pub use error::SettingsError;
pub use memory::MemoryStore;
pub use store::SettingsStore;
