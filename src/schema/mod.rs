//! # Recipe Schema
//!
//! Typed recipe documents and the validation applied before any write
//! reaches the store.

pub mod errors;
pub mod recipe;

pub use errors::{SchemaError, SchemaResult};
pub use recipe::{Recipe, RecipeDraft};
