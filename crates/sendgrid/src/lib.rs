pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::SendGridClient;
pub use error::TransportError;
pub use transport::MailTransport;
pub use types::MailSendRequest;
