//! # Observability
//!
//! Structured logging for the service.

pub mod logger;

pub use logger::{Logger, Severity};
