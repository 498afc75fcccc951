//! HTTP API layer: handlers, middleware, and router assembly.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
