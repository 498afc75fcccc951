//! Business logic services.

pub mod dispatcher;
pub mod pushover;

pub use dispatcher::DispatchService;
