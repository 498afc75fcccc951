//! Pushover message API provider implementation.
//!
//! Sends notifications through the Pushover `messages.json` endpoint.
//! Uses the global `HTTP_CLIENT` for connection pooling and efficiency.
//!
//! API Reference: https://pushover.net/api

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::services::pushover::provider::{ProviderResponse, PushProvider};
use crate::services::pushover::Message;

/// Request body for the Pushover message API
///
/// Optional fields are omitted entirely when unset; flags are the 0/1
/// integers the API expects; durations are whole seconds.
#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url_title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sound: Option<&'a str>,
    priority: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    monospace: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expire: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retry: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u64>,
    timestamp: i64,
}

/// Response body from the Pushover message API
#[derive(Debug, Deserialize)]
struct WireResponse {
    status: u64,
    request: String,
    #[serde(default)]
    receipt: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn flag(value: bool) -> Option<u8> {
    if value { Some(1) } else { None }
}

/// Pushover push notification provider
#[derive(Debug, Clone)]
pub struct PushoverProvider {
    api_url: String,
}

impl PushoverProvider {
    /// Creates a new provider targeting the given message API endpoint
    pub fn new(api_url: String) -> Self {
        Self { api_url }
    }

    /// Builds the wire request body from a message and credentials
    fn build_request_body<'a>(
        &self,
        app_token: &'a str,
        recipient_token: &'a str,
        message: &'a Message,
    ) -> WireMessage<'a> {
        WireMessage {
            token: app_token,
            user: recipient_token,
            message: &message.body,
            title: non_empty(&message.title),
            url: non_empty(&message.url),
            url_title: non_empty(&message.url_title),
            device: non_empty(&message.device_name),
            callback: non_empty(&message.callback_url),
            sound: non_empty(&message.sound),
            priority: message.priority.as_i8(),
            html: flag(message.html),
            monospace: flag(message.monospace),
            expire: message.expire.map(|d| d.as_secs()),
            retry: message.retry.map(|d| d.as_secs()),
            ttl: message.ttl.map(|d| d.as_secs()),
            timestamp: message.timestamp,
        }
    }
}

#[async_trait]
impl PushProvider for PushoverProvider {
    /// Sends a message through the Pushover API
    ///
    /// Any failure (transport error, non-JSON reply, or a reply with
    /// status != 1) is reported as a send error carrying the provider's
    /// diagnostic text.
    async fn send(
        &self,
        app_token: &str,
        recipient_token: &str,
        message: &Message,
    ) -> AppResult<ProviderResponse> {
        let request_body = self.build_request_body(app_token, recipient_token, message);

        let response = HTTP_CLIENT
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Send {
                source: anyhow::Error::new(e),
            })?;

        let http_status = response.status();
        let text = response.text().await.map_err(|e| AppError::Send {
            source: anyhow::Error::new(e),
        })?;

        let wire: WireResponse = serde_json::from_str(&text).map_err(|_| AppError::Send {
            source: anyhow::anyhow!("unexpected response ({}): {}", http_status, text),
        })?;

        if wire.status != 1 {
            let detail = if wire.errors.is_empty() {
                format!("provider returned status {}", wire.status)
            } else {
                wire.errors.join(", ")
            };
            return Err(AppError::Send {
                source: anyhow::anyhow!("{}", detail),
            });
        }

        Ok(ProviderResponse {
            status: wire.status,
            request_id: wire.request,
            receipt: wire.receipt,
        })
    }

    fn name(&self) -> &'static str {
        "pushover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageOptions;

    fn provider() -> PushoverProvider {
        PushoverProvider::new("https://api.pushover.net/1/messages.json".to_string())
    }

    #[test]
    fn test_request_body_minimal_message() {
        let message = Message::build("Server down".to_string(), &MessageOptions::default());
        let body = provider().build_request_body("app-token", "user-key", &message);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["token"], "app-token");
        assert_eq!(json["user"], "user-key");
        assert_eq!(json["message"], "Server down");
        assert_eq!(json["priority"], 0);
        // Unset optional fields must not appear at all
        assert!(json.get("title").is_none());
        assert!(json.get("html").is_none());
        assert!(json.get("monospace").is_none());
        assert!(json.get("expire").is_none());
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_request_body_full_message() {
        let options = MessageOptions {
            title: "Alerts".to_string(),
            url: "https://status.example.com".to_string(),
            url_title: "Status".to_string(),
            device_name: "phone".to_string(),
            callback_url: "https://hooks.example.com/ack".to_string(),
            sound: "siren".to_string(),
            priority: "emergency".to_string(),
            html: "true".to_string(),
            monospace: String::new(),
            expire: "1h".to_string(),
            retry: "5m".to_string(),
            ttl: String::new(),
        };
        let message = Message::build("disk full".to_string(), &options);
        let body = provider().build_request_body("t", "u", &message);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["title"], "Alerts");
        assert_eq!(json["url"], "https://status.example.com");
        assert_eq!(json["url_title"], "Status");
        assert_eq!(json["device"], "phone");
        assert_eq!(json["callback"], "https://hooks.example.com/ack");
        assert_eq!(json["sound"], "siren");
        assert_eq!(json["priority"], 2);
        assert_eq!(json["html"], 1);
        assert!(json.get("monospace").is_none());
        assert_eq!(json["expire"], 3600);
        assert_eq!(json["retry"], 300);
        assert!(json.get("ttl").is_none());
    }

    #[test]
    fn test_wire_response_parsing() {
        let ok: WireResponse =
            serde_json::from_str(r#"{"status":1,"request":"abc-123"}"#).unwrap();
        assert_eq!(ok.status, 1);
        assert_eq!(ok.request, "abc-123");
        assert!(ok.receipt.is_none());
        assert!(ok.errors.is_empty());

        let failed: WireResponse = serde_json::from_str(
            r#"{"status":0,"request":"abc-123","errors":["user identifier is invalid"]}"#,
        )
        .unwrap();
        assert_eq!(failed.status, 0);
        assert_eq!(failed.errors, vec!["user identifier is invalid"]);
    }
}
