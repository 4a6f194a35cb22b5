//! # Recipe Routes
//!
//! Axum handlers binding the five recipe operations to the store.
//!
//! Every store failure is logged and translated into a response at the call
//! site. Nothing is retried.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::store::{SharedStore, UpdateStatement};

use super::errors::{ApiError, ApiResult};
use super::response::{
    MessageResponse, RecipeListResponse, UpdatedRecipeResponse, WrappedRecipeResponse,
};
use super::validation::{parse_recipe_id, validate_create, validate_update};

/// Create recipe routes
pub fn recipe_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/recipes", post(create_handler).get(list_handler))
        .route(
            "/recipes/:id",
            get(get_handler)
                .patch(update_handler)
                .delete(delete_handler),
        )
        .with_state(store)
}

/// Unwrap an optional JSON body. Missing or malformed bodies supply no fields.
fn body_value(body: &Option<Json<Value>>) -> Option<&Value> {
    body.as_ref().map(|Json(value)| value)
}

/// POST /recipes
async fn create_handler(
    State(store): State<SharedStore>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<WrappedRecipeResponse>> {
    let recipe = validate_create(body_value(&body))?;

    let id = store.insert(recipe).await.map_err(|e| {
        warn!(error = %e, "recipe insert failed");
        ApiError::CreationFailed
    })?;

    let created = store
        .get_by_id(id)
        .await
        .map_err(|e| {
            warn!(id, error = %e, "created recipe could not be read back");
            ApiError::CreationFailed
        })?
        .ok_or(ApiError::CreationFailed)?;

    info!(id, "recipe created");
    Ok(Json(WrappedRecipeResponse::created(created)))
}

/// GET /recipes
async fn list_handler(State(store): State<SharedStore>) -> ApiResult<Json<RecipeListResponse>> {
    let recipes = store.list_all().await.map_err(|e| {
        warn!(error = %e, "recipe listing failed");
        ApiError::ListFailed
    })?;

    Ok(Json(RecipeListResponse::new(recipes)))
}

/// GET /recipes/:id
async fn get_handler(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<WrappedRecipeResponse>> {
    let id = parse_recipe_id(&raw_id).ok_or(ApiError::NotFound)?;

    let recipe = store
        .get_by_id(id)
        .await
        .map_err(|e| {
            warn!(id, error = %e, "recipe lookup failed");
            ApiError::NotFound
        })?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(WrappedRecipeResponse::details(recipe)))
}

/// PATCH /recipes/:id
async fn update_handler(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<UpdatedRecipeResponse>> {
    let patch = validate_update(body_value(&body))?;
    let id = parse_recipe_id(&raw_id).ok_or(ApiError::NotFound)?;
    let statement = UpdateStatement::build(id, patch)?;

    let affected = store.update_by_id(&statement).await.map_err(|e| {
        warn!(id, error = %e, "recipe update failed");
        ApiError::NotFound
    })?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    // A concurrent delete can remove the row between the update and this read
    let recipe = store
        .get_by_id(id)
        .await
        .map_err(|e| {
            warn!(id, error = %e, "updated recipe could not be read back");
            ApiError::RefetchFailed
        })?
        .ok_or(ApiError::NotFound)?;

    info!(id, "recipe updated");
    Ok(Json(UpdatedRecipeResponse::new(recipe)))
}

/// DELETE /recipes/:id
///
/// Reports success whether or not a row was removed. A non-integer id
/// matches no row and never reaches the store.
async fn delete_handler(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if let Some(id) = parse_recipe_id(&raw_id) {
        let affected = store.delete_by_id(id).await.map_err(|e| {
            warn!(id, error = %e, "recipe delete failed");
            ApiError::DeleteFailed
        })?;
        debug!(id, affected, "recipe delete applied");
    }

    Ok(Json(MessageResponse::removed()))
}
