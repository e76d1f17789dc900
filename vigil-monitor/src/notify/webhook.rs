//! Webhook delivery over HTTP POST.

use std::time::Duration;

use vigil_core::config::NotifierConfig;
use vigil_core::errors::NotifyError;
use vigil_core::traits::INotifier;

/// Posts alert messages to a webhook endpoint as `{"text": message}`,
/// the shape Slack-compatible receivers expect.
///
/// Delivery is synchronous with a per-request timeout. Callers invoke it
/// outside any monitor lock, so a slow endpoint delays only its own alert.
#[derive(Debug)]
pub struct WebhookNotifier {
    url: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl WebhookNotifier {
    /// Build a client for `url`. Surrounding whitespace is stripped here,
    /// so every construction path posts to the same trimmed endpoint.
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, NotifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NotifyError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self {
            url: url.into().trim().to_string(),
            timeout_secs,
            client,
        })
    }

    /// Build from config, rejecting a channel that cannot deliver.
    pub fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        if !config.is_deliverable() {
            return Err(NotifyError::Disabled);
        }
        Self::new(&config.webhook_url, config.timeout_secs)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl INotifier for WebhookNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let payload = serde_json::json!({ "text": message });
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    NotifyError::Transport {
                        reason: e.to_string(),
                    }
                }
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
