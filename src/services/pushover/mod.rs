//! Pushover message model and delivery provider.

pub mod client;
pub mod message;
pub mod provider;

pub use client::PushoverProvider;
pub use message::{Message, Priority};
pub use provider::{ProviderResponse, PushProvider};
