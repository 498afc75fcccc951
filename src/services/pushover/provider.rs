//! Core push provider trait and types.
//!
//! This module provides the abstraction over the outbound notification
//! delivery API, allowing the dispatcher to be tested without network access.

use crate::error::AppResult;
use crate::services::pushover::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a successful provider send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Provider status code (1 means accepted)
    pub status: u64,
    /// Provider-assigned request identifier
    pub request_id: String,
    /// Receipt identifier, present for emergency-priority messages
    pub receipt: Option<String>,
}

impl ProviderResponse {
    /// Human-readable description written back to the caller on success
    pub fn describe(&self) -> String {
        let mut out = format!("status: {}\nrequest id: {}", self.status, self.request_id);
        if let Some(receipt) = &self.receipt {
            out.push_str(&format!("\nreceipt: {}", receipt));
        }
        out
    }
}

/// Trait for push notification providers
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Sends a message to a recipient
    ///
    /// # Arguments
    /// * `app_token` - Application API credential
    /// * `recipient_token` - Recipient user/group key
    /// * `message` - The message to deliver
    ///
    /// # Returns
    /// The provider's acceptance response, or an error covering
    /// authentication, network, and malformed-recipient failures alike.
    async fn send(
        &self,
        app_token: &str,
        recipient_token: &str,
        message: &Message,
    ) -> AppResult<ProviderResponse>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_without_receipt() {
        let response = ProviderResponse {
            status: 1,
            request_id: "e460545a-8b59-4be2-8b30-15a9b6a0f9e8".to_string(),
            receipt: None,
        };
        assert_eq!(
            response.describe(),
            "status: 1\nrequest id: e460545a-8b59-4be2-8b30-15a9b6a0f9e8"
        );
    }

    #[test]
    fn test_describe_with_receipt() {
        let response = ProviderResponse {
            status: 1,
            request_id: "req-1".to_string(),
            receipt: Some("rcpt-2".to_string()),
        };
        assert_eq!(
            response.describe(),
            "status: 1\nrequest id: req-1\nreceipt: rcpt-2"
        );
    }
}
