use async_trait::async_trait;
use mailshot_core::{DeliveryReceipt, OutboundMessage};

use crate::error::TransportError;

/// Trait for pluggable outbound mail transports.
///
/// Implementations handle the actual delivery of an assembled
/// [`OutboundMessage`] over the network and report acceptance or failure.
/// One call delivers exactly one message; retries are the caller's concern.
#[async_trait]
pub trait MailTransport: Send + Sync + std::fmt::Debug {
    /// Deliver an assembled message. Returns a receipt on acceptance.
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, TransportError>;

    /// Return the transport name (e.g. `"sendgrid"`).
    fn transport_name(&self) -> &'static str;
}
