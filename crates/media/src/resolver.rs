use async_trait::async_trait;
use bytes::Bytes;

use crate::error::MediaError;
use crate::types::MediaObject;

/// Pluggable media resolution service.
///
/// Resolves string references into decoded media and converts decoded media
/// into raw bytes of a requested encoding. Both operations may suspend on
/// network or disk I/O performed by the implementation.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolve a string reference (typically a URL) into a media object.
    ///
    /// Fails when the reference is unreachable or invalid.
    async fn resolve_reference(&self, url: &str) -> Result<MediaObject, MediaError>;

    /// Convert a media object into raw bytes of the requested MIME type.
    ///
    /// Fails when the media is corrupt or the conversion is unsupported.
    async fn to_bytes(&self, media: &MediaObject, content_type: &str)
    -> Result<Bytes, MediaError>;
}
