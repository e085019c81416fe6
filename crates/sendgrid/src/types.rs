use mailshot_core::{Attachment, OutboundMessage};
use serde::Serialize;

/// JSON body for the SendGrid v3 `mail/send` endpoint.
///
/// Borrows from an [`OutboundMessage`]; built per request and serialized
/// directly into the HTTP body. The `attachments` array is omitted entirely
/// when empty, since the API rejects an empty array.
#[derive(Debug, Serialize)]
pub struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: EmailAddress<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<&'a Attachment>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<EmailAddress<'a>>,
}

#[derive(Debug, Serialize)]
struct EmailAddress<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

impl<'a> MailSendRequest<'a> {
    /// Map an [`OutboundMessage`] onto the SendGrid wire shape.
    pub fn from_message(message: &'a OutboundMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![EmailAddress { email: &message.to }],
            }],
            from: EmailAddress {
                email: &message.from,
            },
            subject: &message.subject,
            content: vec![Content {
                content_type: "text/html",
                value: &message.html_body,
            }],
            attachments: message.attachments.iter().collect(),
        }
    }
}
