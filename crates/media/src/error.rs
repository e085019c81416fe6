use thiserror::Error;

/// Errors that can occur during media resolution and conversion.
#[derive(Debug, Error)]
pub enum MediaError {
    /// A media reference could not be fetched.
    #[error("failed to fetch media: {0}")]
    Fetch(String),

    /// The resolver cannot convert between the given content types.
    #[error("unsupported media conversion from {from} to {to}")]
    UnsupportedConversion {
        /// Content type of the resolved media.
        from: String,
        /// Content type requested by the caller.
        to: String,
    },

    /// The media content is corrupt or could not be decoded.
    #[error("failed to decode media: {0}")]
    Decode(String),
}
