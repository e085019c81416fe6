pub mod message;
pub mod options;
pub mod outcome;
pub mod receipt;

pub use message::{Attachment, OutboundMessage, SNAPSHOT_CONTENT_TYPE, SNAPSHOT_FILENAME};
pub use options::NotifyOptions;
pub use outcome::DispatchOutcome;
pub use receipt::DeliveryReceipt;
