//! Recipe API Integration Tests
//!
//! Drives the full router (CORS, tracing and recipe routes) in-process:
//! - create / list / get / patch / delete envelopes and status codes
//! - id assignment and listing order
//! - partial update field isolation and timestamp refresh
//! - store failure translation

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use recipe_api::http_server::{HttpServer, ServerConfig};
use recipe_api::store::{
    MemoryRecipeStore, NewRecipe, Recipe, RecipeStore, SharedStore, SqliteRecipeStore, StoreError,
    StoreResult, UnavailableStore, UpdateStatement,
};

// =============================================================================
// Test Utilities
// =============================================================================

fn app(store: SharedStore) -> Router {
    HttpServer::new(ServerConfig::default(), store).router()
}

fn sqlite_app() -> Router {
    app(Arc::new(SqliteRecipeStore::open_in_memory().unwrap()))
}

fn memory_app() -> Router {
    app(Arc::new(MemoryRecipeStore::new()))
}

fn unavailable_app() -> Router {
    app(Arc::new(UnavailableStore::new("open failed")))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Accepts writes but cannot read anything back
struct WriteOnlyStore;

#[async_trait]
impl RecipeStore for WriteOnlyStore {
    async fn insert(&self, _recipe: NewRecipe) -> StoreResult<i64> {
        Ok(3)
    }

    async fn get_by_id(&self, _id: i64) -> StoreResult<Option<Recipe>> {
        Err(StoreError::Unavailable("read failed".to_string()))
    }

    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        Ok(Vec::new())
    }

    async fn update_by_id(&self, _statement: &UpdateStatement) -> StoreResult<usize> {
        Ok(1)
    }

    async fn delete_by_id(&self, _id: i64) -> StoreResult<usize> {
        Ok(1)
    }
}

fn tea() -> Value {
    json!({
        "title": "Tea",
        "making_time": "5 min",
        "serves": "1",
        "ingredients": "water, tea",
        "cost": 50
    })
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_wrapped_record_with_next_id() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::POST, "/recipes", Some(tea())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe successfully created!");
    assert!(body["recipe"].is_array());
    assert_eq!(body["recipe"].as_array().unwrap().len(), 1);

    let recipe = &body["recipe"][0];
    assert_eq!(recipe["id"], 3);
    assert_eq!(recipe["title"], "Tea");
    assert_eq!(recipe["making_time"], "5 min");
    assert_eq!(recipe["serves"], "1");
    assert_eq!(recipe["ingredients"], "water, tea");
    assert_eq!(recipe["cost"], 50);
    assert_eq!(recipe["created_at"], recipe["updated_at"]);
}

#[tokio::test]
async fn test_create_missing_field_reports_failure_with_200() {
    let router = sqlite_app();
    let mut body = tea();
    body.as_object_mut().unwrap().remove("cost");

    let (status, body) = send(&router, Method::POST, "/recipes", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Recipe creation failed!",
            "required": "title, making_time, serves, ingredients, cost"
        })
    );

    // Nothing was inserted
    let (_, list) = send(&router, Method::GET, "/recipes", None).await;
    assert_eq!(list["recipes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_zero_cost_is_missing() {
    let router = sqlite_app();
    let mut body = tea();
    body["cost"] = json!(0);

    let (status, body) = send(&router, Method::POST, "/recipes", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe creation failed!");
}

#[tokio::test]
async fn test_create_truncates_fractional_cost() {
    let router = sqlite_app();
    let mut body = tea();
    body["cost"] = json!(12.5);

    let (status, body) = send(&router, Method::POST, "/recipes", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe successfully created!");
    assert_eq!(body["recipe"][0]["cost"], 12);
}

#[tokio::test]
async fn test_create_without_json_body() {
    let router = sqlite_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .body(Body::from("title=Tea"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Recipe creation failed!");
}

#[tokio::test]
async fn test_ids_strictly_increase() {
    let router = sqlite_app();
    let mut last = 2;

    for _ in 0..5 {
        let (_, body) = send(&router, Method::POST, "/recipes", Some(tea())).await;
        let id = body["recipe"][0]["id"].as_i64().unwrap();
        assert!(id > last);
        last = id;
    }

    // Deleted ids are not handed out again
    send(&router, Method::DELETE, &format!("/recipes/{}", last), None).await;
    let (_, body) = send(&router, Method::POST, "/recipes", Some(tea())).await;
    assert!(body["recipe"][0]["id"].as_i64().unwrap() > last);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_seeds_then_created_in_order() {
    let router = sqlite_app();

    for title in ["Tea", "Coffee", "Cocoa"] {
        let mut body = tea();
        body["title"] = json!(title);
        send(&router, Method::POST, "/recipes", Some(body)).await;
    }

    let (status, body) = send(&router, Method::GET, "/recipes", None).await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Chicken Curry", "Rice Omelette", "Tea", "Coffee", "Cocoa"]
    );
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_concurrent_creates_each_listed_once() {
    let router = sqlite_app();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move { send(&router, Method::POST, "/recipes", Some(tea())).await })
        })
        .collect();

    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&router, Method::GET, "/recipes", None).await;
    let mut ids: Vec<i64> = body["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=12).collect::<Vec<i64>>());
}

// =============================================================================
// Get by id
// =============================================================================

#[tokio::test]
async fn test_get_seed_record() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::GET, "/recipes/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe details by id");
    assert_eq!(
        body["recipe"],
        json!([{
            "id": 1,
            "title": "Chicken Curry",
            "making_time": "45 min",
            "serves": "4 people",
            "ingredients": "onion, chicken, seasoning",
            "cost": 1000,
            "created_at": "2016-01-10 12:10:12",
            "updated_at": "2016-01-10 12:10:12"
        }])
    );
}

#[tokio::test]
async fn test_get_missing_is_404() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::GET, "/recipes/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "No recipe found"}));

    let (status, _) = send(&router, Method::GET, "/recipes/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Patch
// =============================================================================

#[tokio::test]
async fn test_patch_cost_only() {
    let router = sqlite_app();
    let (_, before) = send(&router, Method::GET, "/recipes/2", None).await;
    let before = before["recipe"][0].clone();

    let (status, body) = send(&router, Method::PATCH, "/recipes/2", Some(json!({"cost": 900}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe successfully updated!");
    assert!(body["recipe"].is_object());

    let after = &body["recipe"];
    assert_eq!(after["id"], 2);
    assert_eq!(after["cost"], 900);
    for field in ["title", "making_time", "serves", "ingredients", "created_at"] {
        assert_eq!(after[field], before[field], "{} changed", field);
    }
    assert!(after["updated_at"].as_str().unwrap() > before["updated_at"].as_str().unwrap());
}

#[tokio::test]
async fn test_patch_integral_float_cost() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::PATCH, "/recipes/2", Some(json!({"cost": 900.0}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe successfully updated!");
    assert_eq!(body["recipe"]["cost"], 900);
    assert_eq!(body["recipe"]["title"], "Rice Omelette");
}

#[tokio::test]
async fn test_patch_repeated_is_idempotent() {
    let router = sqlite_app();
    let patch = json!({"title": "Omurice", "serves": "3 people"});

    let (_, first) = send(&router, Method::PATCH, "/recipes/2", Some(patch.clone())).await;
    let (_, second) = send(&router, Method::PATCH, "/recipes/2", Some(patch)).await;

    for field in ["id", "title", "making_time", "serves", "ingredients", "cost", "created_at"] {
        assert_eq!(first["recipe"][field], second["recipe"][field]);
    }
    assert_eq!(second["recipe"]["title"], "Omurice");
}

#[tokio::test]
async fn test_patch_without_fields_is_400() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::PATCH, "/recipes/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "No fields provided to update."}));

    // Validation runs before the id is looked at
    let (status, _) = send(&router, Method::PATCH, "/recipes/abc", Some(json!({"cost": 0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_missing_record_is_404() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::PATCH, "/recipes/42", Some(json!({"cost": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No recipe found");

    let (status, _) = send(&router, Method::PATCH, "/recipes/abc", Some(json!({"cost": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_existing_then_gone() {
    let router = sqlite_app();

    let (status, body) = send(&router, Method::DELETE, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Recipe successfully removed!"}));

    let (status, _) = send(&router, Method::GET, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_still_succeeds() {
    let router = sqlite_app();

    for uri in ["/recipes/42", "/recipes/9999", "/recipes/abc"] {
        let (status, body) = send(&router, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Recipe successfully removed!");
    }

    let (_, list) = send(&router, Method::GET, "/recipes", None).await;
    assert_eq!(list["recipes"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Store substitution
// =============================================================================

#[tokio::test]
async fn test_memory_store_behaves_like_sqlite() {
    let router = memory_app();

    let (_, created) = send(&router, Method::POST, "/recipes", Some(tea())).await;
    assert_eq!(created["recipe"][0]["id"], 3);

    let (status, patched) = send(&router, Method::PATCH, "/recipes/3", Some(json!({"cost": 75}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["recipe"]["cost"], 75);
    assert_eq!(patched["recipe"]["title"], "Tea");

    let (status, _) = send(&router, Method::DELETE, "/recipes/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&router, Method::GET, "/recipes/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failures_map_to_each_operation_contract() {
    let router = unavailable_app();

    let (status, body) = send(&router, Method::POST, "/recipes", Some(tea())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Recipe creation failed!"}));

    let (status, body) = send(&router, Method::GET, "/recipes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to retrieve recipes");

    let (status, _) = send(&router, Method::GET, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::PATCH, "/recipes/1", Some(json!({"cost": 5}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&router, Method::DELETE, "/recipes/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to delete recipe");
}

#[tokio::test]
async fn test_delete_non_integer_id_skips_store() {
    let router = unavailable_app();

    let (status, body) = send(&router, Method::DELETE, "/recipes/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Recipe successfully removed!"}));
}

#[tokio::test]
async fn test_read_back_failures() {
    let router = app(Arc::new(WriteOnlyStore));

    let (status, body) = send(&router, Method::PATCH, "/recipes/2", Some(json!({"cost": 900}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Failed to retrieve updated recipe"}));

    let (status, body) = send(&router, Method::POST, "/recipes", Some(tea())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Recipe creation failed!"}));
}

#[tokio::test]
async fn test_health() {
    let router = memory_app();

    let (status, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
