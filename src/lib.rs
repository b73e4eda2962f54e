//! ladle - a self-hostable recipe catalog with a filterable REST API

pub mod cli;
pub mod http;
pub mod loader;
pub mod observability;
pub mod query;
pub mod schema;
pub mod store;
