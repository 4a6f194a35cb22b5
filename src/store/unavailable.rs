//! Placeholder store for a server whose database failed to open.
//! Every operation fails, so the server keeps running but no request succeeds.

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::model::{NewRecipe, Recipe};
use super::update::UpdateStatement;
use super::RecipeStore;

pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl RecipeStore for UnavailableStore {
    async fn insert(&self, _recipe: NewRecipe) -> StoreResult<i64> {
        Err(self.error())
    }

    async fn get_by_id(&self, _id: i64) -> StoreResult<Option<Recipe>> {
        Err(self.error())
    }

    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        Err(self.error())
    }

    async fn update_by_id(&self, _statement: &UpdateStatement) -> StoreResult<usize> {
        Err(self.error())
    }

    async fn delete_by_id(&self, _id: i64) -> StoreResult<usize> {
        Err(self.error())
    }
}
