//! Request handlers for the API endpoints.

pub mod health;
pub mod notify;
