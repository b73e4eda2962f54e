//! # Recipe Store Collaborator
//!
//! The document-store interface consumed by the HTTP layer. The store is
//! an injected dependency of the routes, never a module-wide singleton.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use uuid::Uuid;

use crate::query::QuerySpec;
use crate::schema::{Recipe, RecipeDraft};

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Total matches before pagination
    pub total: usize,

    /// The requested page of matches, in sort order
    pub recipes: Vec<Recipe>,
}

/// Document store interface for recipes.
///
/// Implementations must support the derived calories predicate of a
/// `QuerySpec`: the stored `nutrients.calories` value is coerced to a
/// number at lookup time — plain numbers compare directly, strings compare
/// by their first whitespace-delimited token parsed as a decimal — and a
/// record whose value cannot be coerced never matches. How the coercion
/// happens (at match time, or pre-normalized at write time) is the
/// implementation's business.
pub trait RecipeStore: Send + Sync {
    /// Run a query spec: filter, sort, then skip/limit.
    fn search(&self, spec: &QuerySpec) -> StoreResult<SearchResult>;

    /// Count records matching the spec's filters, ignoring pagination.
    fn count(&self, spec: &QuerySpec) -> StoreResult<usize>;

    /// Fetch a single record by identifier.
    fn get(&self, id: Uuid) -> StoreResult<Recipe>;

    /// Validate and insert a draft, returning the stored record.
    fn insert(&self, draft: RecipeDraft) -> StoreResult<Recipe>;

    /// Validate a draft and replace the writable fields of a record.
    fn update(&self, id: Uuid, draft: RecipeDraft) -> StoreResult<Recipe>;

    /// Delete a record by identifier.
    fn delete(&self, id: Uuid) -> StoreResult<()>;
}
