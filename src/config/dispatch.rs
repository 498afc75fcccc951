//! Dispatch credentials and message options read from the process environment
//!
//! The dispatcher itself never touches the environment: everything it needs is
//! captured here once at startup and injected. Which variable names are read
//! depends on the configured [`Profile`].

use crate::config::settings::Profile;

/// Raw optional message configuration values
///
/// All values are kept as the raw strings found in the environment. Parsing
/// into typed message fields is deliberately deferred to message construction,
/// where malformed values fall back to defaults rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    /// Notification title
    pub title: String,
    /// Supplementary URL attached to the notification
    pub url: String,
    /// Display title for the supplementary URL
    pub url_title: String,
    /// Target device name
    pub device_name: String,
    /// Callback URL for emergency-priority receipts
    pub callback_url: String,
    /// Notification sound name
    pub sound: String,
    /// Priority name ("lowest", "low", "high", "emergency")
    pub priority: String,
    /// HTML formatting flag (literal "true" enables)
    pub html: String,
    /// Monospace formatting flag (literal "true" enables)
    pub monospace: String,
    /// Emergency expiration as a duration string (e.g. "1h")
    pub expire: String,
    /// Emergency retry interval as a duration string (e.g. "5m")
    pub retry: String,
    /// Message time-to-live as a duration string
    pub ttl: String,
}

/// Credentials and message options for the dispatcher, captured once from the
/// environment and injected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSettings {
    /// Active variable-naming profile
    pub profile: Profile,
    /// Application API token
    pub app_token: String,
    /// Recipient user/group key
    pub recipient_token: String,
    /// Optional message configuration (always empty under the minimal profile)
    pub options: MessageOptions,
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

impl DispatchSettings {
    /// Capture dispatch settings from the process environment
    ///
    /// The full profile reads the `PUSHOVER_*` variable surface including all
    /// optional message fields. The minimal profile reads only `APP_TOKEN`
    /// and `RECIPIENT_TOKEN` and sends body-only messages.
    ///
    /// Missing variables yield empty strings; credential presence is checked
    /// per dispatch, not here.
    pub fn from_env(profile: Profile) -> Self {
        match profile {
            Profile::Full => Self {
                profile,
                app_token: env_or_empty("PUSHOVER_APP_TOKEN"),
                recipient_token: env_or_empty("PUSHOVER_RECIPIENT_TOKEN"),
                options: MessageOptions {
                    title: env_or_empty("PUSHOVER_TITLE"),
                    url: env_or_empty("PUSHOVER_URL"),
                    url_title: env_or_empty("PUSHOVER_URL_TITLE"),
                    device_name: env_or_empty("PUSHOVER_DEVICE_NAME"),
                    callback_url: env_or_empty("PUSHOVER_CALLBACK_URL"),
                    sound: env_or_empty("PUSHOVER_SOUND"),
                    priority: env_or_empty("PUSHOVER_PRIORITY"),
                    html: env_or_empty("PUSHOVER_HTML"),
                    monospace: env_or_empty("PUSHOVER_MONOSPACE"),
                    expire: env_or_empty("PUSHOVER_EXPIRE"),
                    retry: env_or_empty("PUSHOVER_RETRY"),
                    ttl: env_or_empty("PUSHOVER_TTL"),
                },
            },
            Profile::Minimal => Self {
                profile,
                app_token: env_or_empty("APP_TOKEN"),
                recipient_token: env_or_empty("RECIPIENT_TOKEN"),
                options: MessageOptions::default(),
            },
        }
    }

    /// Whether both required credentials are present and non-empty
    pub fn has_credentials(&self) -> bool {
        !self.app_token.is_empty() && !self.recipient_token.is_empty()
    }
}
