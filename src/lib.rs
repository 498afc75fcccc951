//! Pushgate Library
//!
//! Core library modules for the pushgate notification relay service.

pub mod api;
pub mod config;
pub mod error;
pub mod external;
pub mod server;
pub mod services;
pub mod state;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
