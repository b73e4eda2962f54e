//! # Recipe Routes
//!
//! Handlers translating HTTP requests into store operations. The store is
//! injected through router state; handlers hold no state of their own.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::query::QuerySpec;
use crate::schema::{Recipe, RecipeDraft};
use crate::store::RecipeStore;

use super::errors::{ApiError, ApiResult};
use super::response::{DeleteResponse, ListResponse, SingleResponse};

/// Shared route state: the injected store collaborator
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

/// Build the recipe API router
pub fn recipe_routes(state: AppState) -> Router {
    Router::new()
        .route("/recipes", get(list).post(create))
        .route("/recipes/search", get(search))
        .route("/recipes/:id", get(fetch).put(update).delete(remove))
        .with_state(state)
}

/// Run the translator and the store lookup for a list/search request
fn run_query(
    state: &AppState,
    params: &HashMap<String, String>,
) -> ApiResult<ListResponse<Recipe>> {
    let spec = QuerySpec::from_params(params);
    let result = state.store.search(&spec)?;
    Ok(ListResponse::new(
        spec.page,
        spec.limit,
        result.total,
        result.recipes,
    ))
}

/// List recipes with pagination, sorting, and filters
async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse<Recipe>>> {
    Ok(Json(run_query(&state, &params)?))
}

/// Search recipes; same translator semantics as the list route
async fn search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse<Recipe>>> {
    Ok(Json(run_query(&state, &params)?))
}

/// Fetch a single recipe by id
async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SingleResponse<Recipe>>> {
    let id = parse_id(&id)?;
    Ok(Json(SingleResponse::new(state.store.get(id)?)))
}

/// Create a recipe
async fn create(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> ApiResult<(StatusCode, Json<SingleResponse<Recipe>>)> {
    let recipe = state.store.insert(draft)?;
    Ok((StatusCode::CREATED, Json(SingleResponse::new(recipe))))
}

/// Replace a recipe's writable fields
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<RecipeDraft>,
) -> ApiResult<Json<SingleResponse<Recipe>>> {
    let id = parse_id(&id)?;
    Ok(Json(SingleResponse::new(state.store.update(id, draft)?)))
}

/// Delete a recipe
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    Ok(Json(DeleteResponse::success()))
}

/// Malformed identifiers are rejected here, before reaching the store
fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_router_builds() {
        let state = AppState::new(Arc::new(MemoryStore::new()));
        let _router = recipe_routes(state);
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id(&Uuid::new_v4().to_string()).is_ok());
    }
}
