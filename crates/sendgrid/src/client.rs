use async_trait::async_trait;
use mailshot_core::{DeliveryReceipt, OutboundMessage};
use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::TransportError;
use crate::transport::MailTransport;
use crate::types::MailSendRequest;

/// Default SendGrid v3 API base URL.
const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com";

/// Response header carrying the provider-assigned message identifier.
const MESSAGE_ID_HEADER: &str = "x-message-id";

/// Credential holder for the SendGrid v3 mail API.
///
/// Construction is synchronous and performs no network I/O; the handle only
/// binds an API key to an HTTP client. It is stateless and never mutated --
/// when the owning configuration changes, the old handle is discarded and a
/// new one constructed.
///
/// # Examples
///
/// ```
/// use mailshot_sendgrid::{MailTransport, SendGridClient};
///
/// let client = SendGridClient::new("SG.example-key");
/// assert_eq!(client.transport_name(), "sendgrid");
/// ```
#[derive(Clone)]
pub struct SendGridClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for SendGridClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SendGridClient {
    /// Create a client bound to the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            client: Client::new(),
        }
    }

    /// Override the API base URL.
    ///
    /// Primarily useful for pointing tests at a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a client with a custom `reqwest::Client`.
    ///
    /// Useful for sharing a connection pool or configuring timeouts.
    pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            client,
        }
    }
}

#[async_trait]
impl MailTransport for SendGridClient {
    #[instrument(skip(self, message), fields(transport = "sendgrid", to = %message.to))]
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, TransportError> {
        let body = MailSendRequest::from_message(message);

        debug!(subject = %message.subject, "posting mail/send request");
        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let message_id = response
            .headers()
            .get(MESSAGE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "mail API rejected the message");
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), "mail accepted by API");
        Ok(DeliveryReceipt {
            message_id,
            status: "sent".to_owned(),
        })
    }

    fn transport_name(&self) -> &'static str {
        "sendgrid"
    }
}
