use serde::{Deserialize, Serialize};

/// Outcome of dispatching a notification.
///
/// A notification channel that is not configured degrades to a silent drop
/// rather than an error, so "nothing was attempted" is a distinct variant
/// callers can observe. Delivery failures travel on the error channel of the
/// dispatch call instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The message was handed to the transport and accepted.
    Sent {
        /// Recipient the message was addressed to.
        to: String,
    },
    /// Nothing was attempted.
    Skipped {
        /// Why the notification was dropped.
        reason: String,
    },
}

impl DispatchOutcome {
    /// Returns `true` if the message was delivered to the transport.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    /// Returns `true` if the notification was dropped without an attempt.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
