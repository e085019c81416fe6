use std::sync::Arc;

use mailshot_core::{
    Attachment, DispatchOutcome, NotifyOptions, OutboundMessage, SNAPSHOT_CONTENT_TYPE,
};
use mailshot_media::{MediaResolver, MediaSource};
use mailshot_sendgrid::{MailTransport, SendGridClient};
use mailshot_settings::SettingsStore;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::error::NotifyError;
use crate::settings::{KEY_APIKEY, KEY_FROM, KEY_TO, Setting, SettingKind};

/// Builds a transport handle from an API key.
type TransportFactory = dyn Fn(String) -> Arc<dyn MailTransport> + Send + Sync;

/// Email notification dispatcher.
///
/// Owns a lazily re-derived mail client handle keyed by the three persisted
/// settings (`to`, `from`, `apikey`). The handle exists exactly when all
/// three are present and non-empty; while any is missing, dispatch degrades
/// to a silently skipped outcome rather than an error.
pub struct Notifier {
    store: Arc<dyn SettingsStore>,
    resolver: Arc<dyn MediaResolver>,
    factory: Box<TransportFactory>,
    client: RwLock<Option<Arc<dyn MailTransport>>>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}

impl Notifier {
    /// Create a notifier over the given settings store and media resolver.
    ///
    /// Eagerly evaluates the persisted configuration and builds a
    /// [`SendGridClient`] handle if it is already complete.
    pub async fn new(
        store: Arc<dyn SettingsStore>,
        resolver: Arc<dyn MediaResolver>,
    ) -> Result<Self, NotifyError> {
        Self::with_transport_factory(store, resolver, |api_key| {
            let client: Arc<dyn MailTransport> = Arc::new(SendGridClient::new(api_key));
            client
        })
        .await
    }

    /// Create a notifier that builds its transport handle through `factory`.
    ///
    /// This is primarily useful for testing, allowing injection of a mock
    /// transport while keeping the lifecycle semantics intact.
    pub async fn with_transport_factory(
        store: Arc<dyn SettingsStore>,
        resolver: Arc<dyn MediaResolver>,
        factory: impl Fn(String) -> Arc<dyn MailTransport> + Send + Sync + 'static,
    ) -> Result<Self, NotifyError> {
        let notifier = Self {
            store,
            resolver,
            factory: Box::new(factory),
            client: RwLock::new(None),
        };
        notifier.rebuild_client().await?;
        Ok(notifier)
    }

    /// Returns `true` if all three settings are present and a client handle
    /// exists.
    pub async fn is_configured(&self) -> bool {
        self.client.read().await.is_some()
    }

    /// The current client handle, if any.
    ///
    /// Each configuration write produces a fresh handle, so callers can
    /// observe rebuilds through `Arc` identity.
    pub async fn client(&self) -> Option<Arc<dyn MailTransport>> {
        self.client.read().await.clone()
    }

    /// Describe the three configurable fields for a host configuration UI.
    ///
    /// Values reflect the store at call time. The API key field carries the
    /// password hint so callers can mask it.
    pub async fn settings(&self) -> Result<Vec<Setting>, NotifyError> {
        Ok(vec![
            Setting {
                key: KEY_TO.to_owned(),
                title: "To".to_owned(),
                description: "Recipient of emails created by this notifier.".to_owned(),
                value: self.store.get(KEY_TO).await?,
                kind: SettingKind::Text,
            },
            Setting {
                key: KEY_FROM.to_owned(),
                title: "From".to_owned(),
                description: "Sender address for emails created by this notifier. Must be a \
                              verified sender in your SendGrid account."
                    .to_owned(),
                value: self.store.get(KEY_FROM).await?,
                kind: SettingKind::Text,
            },
            Setting {
                key: KEY_APIKEY.to_owned(),
                title: "SendGrid API Key".to_owned(),
                description: "API key used to authorize mail delivery.".to_owned(),
                value: self.store.get(KEY_APIKEY).await?,
                kind: SettingKind::Password,
            },
        ])
    }

    /// Write one setting and re-derive the client handle.
    ///
    /// The handle is rebuilt even when the written value equals the previous
    /// one. Store failures propagate.
    pub async fn put_setting(&self, key: &str, value: &str) -> Result<(), NotifyError> {
        self.store.set(key, value).await?;
        self.rebuild_client().await
    }

    /// Read a setting, treating an empty string as unset.
    async fn read_setting(&self, key: &str) -> Result<Option<String>, NotifyError> {
        Ok(self.store.get(key).await?.filter(|value| !value.is_empty()))
    }

    /// Re-derive the client handle from the current configuration.
    ///
    /// The previous handle is discarded unconditionally; a complete
    /// configuration yields a fresh handle, an incomplete one clears it.
    async fn rebuild_client(&self) -> Result<(), NotifyError> {
        let to = self.read_setting(KEY_TO).await?;
        let from = self.read_setting(KEY_FROM).await?;
        let api_key = self.read_setting(KEY_APIKEY).await?;

        let next = match (to, from, api_key) {
            (Some(_), Some(_), Some(api_key)) => Some((self.factory)(api_key)),
            _ => None,
        };

        let ready = next.is_some();
        *self.client.write().await = next;

        if ready {
            info!("initialized new mail client");
        } else {
            debug!("configuration incomplete, mail client cleared");
        }
        Ok(())
    }

    /// Dispatch one notification as an email.
    ///
    /// Runs the pipeline sequentially: resolve media, encode the attachment,
    /// assemble the message, deliver. Completes with
    /// [`DispatchOutcome::Skipped`] when the channel is not configured;
    /// notification loss is silent by design so a caller broadcasting to
    /// several channels is not disrupted. Media and transport failures
    /// propagate unmodified, with no retry.
    ///
    /// The `icon` parameter is accepted for interface compatibility but never
    /// attached; only `media` produces an attachment.
    #[instrument(skip(self, options, media, _icon), fields(title = %title))]
    pub async fn send_notification(
        &self,
        title: &str,
        options: Option<NotifyOptions>,
        media: Option<MediaSource>,
        _icon: Option<MediaSource>,
    ) -> Result<DispatchOutcome, NotifyError> {
        // The handle is captured once at entry and not re-checked afterwards.
        let Some(client) = self.client.read().await.clone() else {
            warn!("mail client not initialized, cannot send notification");
            return Ok(DispatchOutcome::Skipped {
                reason: "mail client not initialized".to_owned(),
            });
        };

        debug!("starting to send email");

        let body = options.and_then(|o| o.body).unwrap_or_default();

        let media = match media {
            Some(MediaSource::Reference(url)) => {
                Some(self.resolver.resolve_reference(&url).await?)
            }
            Some(MediaSource::Resolved(object)) => Some(object),
            None => None,
        };

        let mut attachments = Vec::new();
        if let Some(object) = media {
            let data = self.resolver.to_bytes(&object, SNAPSHOT_CONTENT_TYPE).await?;
            attachments.push(Attachment::png_snapshot(&data));
        }

        // to/from are re-read at send time rather than cached in the handle.
        let to = self.read_setting(KEY_TO).await?.unwrap_or_default();
        let from = self.read_setting(KEY_FROM).await?.unwrap_or_default();

        let message = OutboundMessage {
            to: to.clone(),
            from,
            subject: title.to_owned(),
            html_body: body,
            attachments,
        };

        client.send(&message).await?;

        info!(to = %to, "email sent");
        Ok(DispatchOutcome::Sent { to })
    }
}
