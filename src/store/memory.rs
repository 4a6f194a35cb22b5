//! In-process recipe store
//!
//! Same observable behaviour as the SQLite store, without a database. Used by
//! tests that exercise the HTTP layer in isolation.

use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::model::{now_timestamp, seed_recipes, NewRecipe, Recipe};
use super::update::{Assignment, UpdateStatement};
use super::RecipeStore;

struct Table {
    rows: Vec<Recipe>,
    /// Highest id ever assigned; ids are never reused
    last_id: i64,
}

/// Recipe store backed by a `Vec`
pub struct MemoryRecipeStore {
    table: RwLock<Table>,
}

impl MemoryRecipeStore {
    /// Create a store holding the seed rows
    pub fn new() -> Self {
        let rows = seed_recipes();
        let last_id = rows.iter().map(|r| r.id).max().unwrap_or(0);

        Self {
            table: RwLock::new(Table { rows, last_id }),
        }
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(recipe: &mut Recipe, assignment: &Assignment) {
    match assignment {
        Assignment::Title(v) => recipe.title = v.clone(),
        Assignment::MakingTime(v) => recipe.making_time = v.clone(),
        Assignment::Serves(v) => recipe.serves = v.clone(),
        Assignment::Ingredients(v) => recipe.ingredients = v.clone(),
        Assignment::Cost(v) => recipe.cost = *v,
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn insert(&self, recipe: NewRecipe) -> StoreResult<i64> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;

        table.last_id += 1;
        let id = table.last_id;
        let now = now_timestamp();

        table.rows.push(Recipe {
            id,
            title: recipe.title,
            making_time: recipe.making_time,
            serves: recipe.serves,
            ingredients: recipe.ingredients,
            cost: recipe.cost,
            created_at: now.clone(),
            updated_at: now,
        });

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Recipe>> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.clone())
    }

    async fn update_by_id(&self, statement: &UpdateStatement) -> StoreResult<usize> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;

        let Some(recipe) = table.rows.iter_mut().find(|r| r.id == statement.id()) else {
            return Ok(0);
        };

        for assignment in statement.assignments() {
            apply(recipe, assignment);
        }
        recipe.updated_at = now_timestamp();

        Ok(1)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<usize> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;

        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);

        Ok(before - table.rows.len())
    }
}
