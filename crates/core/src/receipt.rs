/// Result of a successful delivery handoff to a mail transport.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Provider-assigned message identifier (if available).
    pub message_id: Option<String>,
    /// Human-readable status (e.g. `"sent"`).
    pub status: String,
}
