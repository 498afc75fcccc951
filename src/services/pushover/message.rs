//! Outbound message model and permissive option mapping
//!
//! Options arrive as raw configuration strings. Mapping is deliberately
//! forgiving: unrecognized priority names fall back to normal, anything other
//! than the literal "true" is false, and duration strings that fail to parse
//! leave the field unset. Only the body is required.

use std::time::Duration;

use jiff::Timestamp;

use crate::config::MessageOptions;

/// Notification priority levels recognized by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// No sound or vibration, no banner
    Lowest,
    /// No sound or vibration
    Low,
    /// Default delivery
    #[default]
    Normal,
    /// Bypasses quiet hours
    High,
    /// Repeats until acknowledged; requires retry and expire
    Emergency,
}

impl Priority {
    /// Map a configuration string to a priority level
    ///
    /// Matching is case-sensitive and exact; any unrecognized or empty value
    /// yields `Normal`.
    pub fn from_config(value: &str) -> Self {
        match value {
            "high" => Priority::High,
            "low" => Priority::Low,
            "emergency" => Priority::Emergency,
            "lowest" => Priority::Lowest,
            _ => Priority::Normal,
        }
    }

    /// Numeric priority value used on the wire
    pub fn as_i8(&self) -> i8 {
        match self {
            Priority::Lowest => -2,
            Priority::Low => -1,
            Priority::Normal => 0,
            Priority::High => 1,
            Priority::Emergency => 2,
        }
    }
}

/// Parse a boolean flag: only the literal string "true" enables it
fn parse_flag(value: &str) -> bool {
    value == "true"
}

/// Parse a duration string, ignoring failures
///
/// Accepts forms like "30s", "5m", "1h 30m". Malformed or empty strings
/// return `None` and are not reported.
fn parse_duration(value: &str) -> Option<Duration> {
    humantime::parse_duration(value).ok()
}

/// An outbound notification message
///
/// Constructed fresh per dispatch from the request body and the injected
/// options, used for exactly one provider call, then discarded. Optional
/// string fields use the empty string as "unset".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Notification text, the raw request payload verbatim
    pub body: String,
    /// Notification title (provider uses the application name when empty)
    pub title: String,
    /// Supplementary URL
    pub url: String,
    /// Display title for the supplementary URL
    pub url_title: String,
    /// Target device name
    pub device_name: String,
    /// Callback URL for emergency receipts
    pub callback_url: String,
    /// Notification sound name
    pub sound: String,
    /// Delivery priority
    pub priority: Priority,
    /// Enable HTML formatting
    pub html: bool,
    /// Enable monospace formatting
    pub monospace: bool,
    /// Emergency expiration window
    pub expire: Option<Duration>,
    /// Emergency retry interval
    pub retry: Option<Duration>,
    /// Message time-to-live
    pub ttl: Option<Duration>,
    /// Send time in seconds since the Unix epoch, always set
    pub timestamp: i64,
}

impl Message {
    /// Build a message from a request body and the configured options
    ///
    /// The body is carried verbatim. The timestamp is taken at construction
    /// time.
    pub fn build(body: String, options: &MessageOptions) -> Self {
        Self {
            body,
            title: options.title.clone(),
            url: options.url.clone(),
            url_title: options.url_title.clone(),
            device_name: options.device_name.clone(),
            callback_url: options.callback_url.clone(),
            sound: options.sound.clone(),
            priority: Priority::from_config(&options.priority),
            html: parse_flag(&options.html),
            monospace: parse_flag(&options.monospace),
            expire: parse_duration(&options.expire),
            retry: parse_duration(&options.retry),
            ttl: parse_duration(&options.ttl),
            timestamp: Timestamp::now().as_second(),
        }
    }
}
