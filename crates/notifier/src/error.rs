use mailshot_media::MediaError;
use mailshot_sendgrid::TransportError;
use mailshot_settings::SettingsError;
use thiserror::Error;

/// Errors surfaced by the notifier's public operations.
///
/// An incomplete configuration is deliberately not represented here: dispatch
/// degrades to a skipped outcome instead of failing. Collaborator failures
/// propagate verbatim, without retries or wrapping beyond the variant tag.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The settings store failed to read or write.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Media resolution or conversion failed.
    #[error(transparent)]
    Media(#[from] MediaError),

    /// The mail transport reported a delivery failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
