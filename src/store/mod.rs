//! # Recipe Store
//!
//! Persistence for the single `recipes` table.
//!
//! [`RecipeStore`] is the seam the HTTP layer talks to. The server builds one
//! instance at startup and hands it to the router as [`SharedStore`]:
//!
//! - [`SqliteRecipeStore`] - in-memory SQLite, dropped and reseeded on open
//! - [`MemoryRecipeStore`] - plain in-process rows, for tests
//! - [`UnavailableStore`] - used when SQLite could not be opened

mod errors;
mod memory;
mod model;
mod sqlite;
mod unavailable;
pub mod update;

use std::sync::Arc;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryRecipeStore;
pub use model::{now_timestamp, seed_recipes, NewRecipe, Recipe, RecipePatch, TIMESTAMP_FORMAT};
pub use sqlite::SqliteRecipeStore;
pub use unavailable::UnavailableStore;
pub use update::{Assignment, UpdateError, UpdateStatement};

/// Store handle shared across request handlers
pub type SharedStore = Arc<dyn RecipeStore>;

/// Record store operations
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a recipe and return its assigned id
    async fn insert(&self, recipe: NewRecipe) -> StoreResult<i64>;

    /// Fetch one recipe
    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Recipe>>;

    /// Fetch every recipe in natural (insertion) order
    async fn list_all(&self) -> StoreResult<Vec<Recipe>>;

    /// Apply a partial update and return the number of rows affected
    async fn update_by_id(&self, statement: &UpdateStatement) -> StoreResult<usize>;

    /// Delete a recipe and return the number of rows affected
    async fn delete_by_id(&self, id: i64) -> StoreResult<usize>;
}
