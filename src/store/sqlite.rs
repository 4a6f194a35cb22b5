//! SQLite-backed recipe store
//!
//! The database lives in memory for the lifetime of the process. Opening it
//! drops and recreates the table, then inserts the seed rows. Statements run
//! on tokio's blocking pool so request handlers never block the runtime.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::model::{seed_recipes, NewRecipe, Recipe};
use super::update::UpdateStatement;
use super::RecipeStore;

const SCHEMA: &str = "
    DROP TABLE IF EXISTS recipes;

    CREATE TABLE IF NOT EXISTS recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        making_time TEXT NOT NULL,
        serves TEXT NOT NULL,
        ingredients TEXT NOT NULL,
        cost INTEGER NOT NULL,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
    );
";

const SELECT_COLUMNS: &str =
    "SELECT id, title, making_time, serves, ingredients, cost, created_at, updated_at FROM recipes";

/// Recipe store over a single in-memory SQLite connection
#[derive(Clone)]
pub struct SqliteRecipeStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRecipeStore {
    /// Open a fresh in-memory database with the schema and seed rows
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize(&conn)?;
        debug!("recipes table created and seeded");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `op` against the connection on the blocking pool
    async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| StoreError::LockPoisoned)?;
            op(&conn).map_err(StoreError::from)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)?;

    for recipe in seed_recipes() {
        conn.execute(
            "INSERT INTO recipes (
                id, title, making_time, serves, ingredients, cost, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                recipe.id,
                recipe.title,
                recipe.making_time,
                recipe.serves,
                recipe.ingredients,
                recipe.cost,
                recipe.created_at,
                recipe.updated_at,
            ],
        )?;
    }

    Ok(())
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get(0)?,
        title: row.get(1)?,
        making_time: row.get(2)?,
        serves: row.get(3)?,
        ingredients: row.get(4)?,
        cost: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn insert(&self, recipe: NewRecipe) -> StoreResult<i64> {
        self.run(move |conn| {
            conn.execute(
                "INSERT INTO recipes (title, making_time, serves, ingredients, cost)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    recipe.title,
                    recipe.making_time,
                    recipe.serves,
                    recipe.ingredients,
                    recipe.cost,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Recipe>> {
        self.run(move |conn| {
            conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                recipe_from_row,
            )
            .optional()
        })
        .await
    }

    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        self.run(|conn| {
            let mut stmt = conn.prepare(SELECT_COLUMNS)?;
            let rows = stmt.query_map([], recipe_from_row)?;
            rows.collect()
        })
        .await
    }

    async fn update_by_id(&self, statement: &UpdateStatement) -> StoreResult<usize> {
        let sql = statement.sql();
        let values = statement.params();

        self.run(move |conn| conn.execute(&sql, params_from_iter(values)))
            .await
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<usize> {
        self.run(move |conn| conn.execute("DELETE FROM recipes WHERE id = ?1", [id]))
            .await
    }
}
