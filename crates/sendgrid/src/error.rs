use thiserror::Error;

/// Errors that can occur while delivering mail through a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// An HTTP-level transport error occurred (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The mail API rejected the message.
    #[error("mail API rejected the message: HTTP {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body text, if any.
        body: String,
    },

    /// The message could not be serialized for the request body.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
