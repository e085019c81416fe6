use serde::{Deserialize, Serialize};

/// Per-request notification options.
///
/// Currently carries only the body text; absent fields fall back to defaults
/// during dispatch (an absent body becomes the empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyOptions {
    /// HTML body for the notification email.
    pub body: Option<String>,
}

impl NotifyOptions {
    /// Options carrying the given body text.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_body() {
        assert!(NotifyOptions::default().body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let options = NotifyOptions::with_body("<b>hi</b>");
        assert_eq!(options.body.as_deref(), Some("<b>hi</b>"));
    }
}
