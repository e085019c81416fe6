use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Filename used for the single image attachment a notification may carry.
pub const SNAPSHOT_FILENAME: &str = "snapshot.png";

/// MIME type requested from the media resolver and declared on the attachment.
pub const SNAPSHOT_CONTENT_TYPE: &str = "image/png";

/// A file attached to an outbound message.
///
/// Content is base64-encoded for transport. The content type serializes as
/// `type`, matching the field name transactional email APIs expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64-encoded file content.
    pub content: String,

    /// Filename presented to the recipient.
    pub filename: String,

    /// MIME content type (e.g. `"image/png"`).
    #[serde(rename = "type")]
    pub content_type: String,

    /// Content disposition; `"attachment"` for downloadable files.
    pub disposition: String,
}

impl Attachment {
    /// Build the snapshot attachment from raw PNG bytes.
    ///
    /// Base64-encodes the bytes and applies the fixed filename, MIME type and
    /// disposition used for notification snapshots.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailshot_core::Attachment;
    ///
    /// let attachment = Attachment::png_snapshot(b"Hello World");
    /// assert_eq!(attachment.content, "SGVsbG8gV29ybGQ=");
    /// assert_eq!(attachment.filename, "snapshot.png");
    /// ```
    pub fn png_snapshot(data: &[u8]) -> Self {
        Self {
            content: BASE64.encode(data),
            filename: SNAPSHOT_FILENAME.to_owned(),
            content_type: SNAPSHOT_CONTENT_TYPE.to_owned(),
            disposition: "attachment".to_owned(),
        }
    }
}

/// A fully assembled email, ready to hand to a mail transport.
///
/// Built fresh per notification request, immutable once constructed, and
/// discarded after delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Recipient email address.
    pub to: String,

    /// Sender email address.
    pub from: String,

    /// Subject line.
    pub subject: String,

    /// HTML body. May be empty.
    pub html_body: String,

    /// Zero or one snapshot attachment.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
