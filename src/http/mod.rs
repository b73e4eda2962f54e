//! # HTTP Surface
//!
//! Axum routes, response envelopes, and the server for the recipe API.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{DeleteResponse, ListResponse, SingleResponse};
pub use routes::{recipe_routes, AppState};
pub use server::HttpServer;
