use bytes::Bytes;

/// Decoded media content paired with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaObject {
    /// MIME content type (e.g. `"image/png"`).
    pub content_type: String,
    /// The raw binary content.
    pub data: Bytes,
}

/// Media input for a notification: either a reference still to be resolved
/// or an already-decoded object.
///
/// Resolution happens only on the [`Reference`](MediaSource::Reference)
/// variant; a [`Resolved`](MediaSource::Resolved) object is used as-is.
#[derive(Debug, Clone)]
pub enum MediaSource {
    /// A URL to resolve through a [`MediaResolver`](crate::MediaResolver).
    Reference(String),
    /// Media the caller has already resolved.
    Resolved(MediaObject),
}

impl MediaSource {
    /// A reference source from any URL-like string.
    pub fn reference(url: impl Into<String>) -> Self {
        Self::Reference(url.into())
    }
}
