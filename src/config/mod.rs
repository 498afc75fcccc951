//! Configuration management for pushgate
//!
//! Layered settings loading (TOML files + `PUSHGATE_*` environment overrides)
//! plus the dispatch credential surface captured from the environment.

pub mod dispatch;
pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatch::{DispatchSettings, MessageOptions};
pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, DispatchConfig, LoggerSettings, Profile, ServerConfig, Settings,
};
