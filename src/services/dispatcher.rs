//! Notification dispatch service.
//!
//! The single flow of the system: check credentials, build the message from
//! the request body and injected options, make exactly one provider call,
//! and describe the outcome. Stateless across invocations, no retries.

use std::sync::Arc;

use crate::config::DispatchSettings;
use crate::error::{AppError, AppResult};
use crate::services::pushover::{Message, PushProvider};

/// Dispatch service owning the injected settings and the provider seam
#[derive(Clone)]
pub struct DispatchService {
    settings: DispatchSettings,
    provider: Arc<dyn PushProvider>,
}

impl DispatchService {
    /// Creates a new dispatch service
    pub fn new(settings: DispatchSettings, provider: Arc<dyn PushProvider>) -> Self {
        Self { settings, provider }
    }

    /// Dispatches one notification carrying the given body
    ///
    /// Missing credentials abort before any provider call. On success the
    /// provider's response description is returned for the caller to write
    /// back verbatim.
    pub async fn dispatch(&self, body: String) -> AppResult<String> {
        if !self.settings.has_credentials() {
            return Err(AppError::MissingCredentials {
                message: self.settings.profile.missing_credentials_message(),
            });
        }

        let message = Message::build(body, &self.settings.options);

        tracing::debug!(
            provider = self.provider.name(),
            priority = ?message.priority,
            body_len = message.body.len(),
            "Dispatching notification"
        );

        let response = self
            .provider
            .send(&self.settings.app_token, &self.settings.recipient_token, &message)
            .await?;

        tracing::info!(
            provider = self.provider.name(),
            request_id = %response.request_id,
            "Notification accepted"
        );

        Ok(response.describe())
    }
}
