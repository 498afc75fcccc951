//! External service clients.

pub mod client;
