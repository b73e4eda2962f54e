//! # Query Filter Translation
//!
//! Translates raw HTTP query parameters into filter predicates, a sort
//! specification, and pagination parameters. Stateless and infallible:
//! every degenerate input resolves to a valid, possibly less-constrained
//! spec.

pub mod filter;
pub mod spec;

pub use filter::{Comparison, NumericFilter};
pub use spec::{QuerySpec, SortDirection, SortKey, DEFAULT_LIMIT, DEFAULT_PAGE};
