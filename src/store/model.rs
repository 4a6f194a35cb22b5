//! Recipe record types
//!
//! `Recipe` is the stored row as returned to clients. `NewRecipe` and
//! `RecipePatch` carry request input that already passed presence checks.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Timestamp layout shared by the seed rows and SQLite's `CURRENT_TIMESTAMP`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields of a recipe about to be inserted. All of them are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
}

/// Fields supplied to a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub making_time: Option<String>,
    pub serves: Option<String>,
    pub ingredients: Option<String>,
    pub cost: Option<i64>,
}

impl RecipePatch {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.making_time.is_none()
            && self.serves.is_none()
            && self.ingredients.is_none()
            && self.cost.is_none()
    }
}

/// Current UTC time in [`TIMESTAMP_FORMAT`]
pub fn now_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// The two rows every store starts with
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Chicken Curry".to_string(),
            making_time: "45 min".to_string(),
            serves: "4 people".to_string(),
            ingredients: "onion, chicken, seasoning".to_string(),
            cost: 1000,
            created_at: "2016-01-10 12:10:12".to_string(),
            updated_at: "2016-01-10 12:10:12".to_string(),
        },
        Recipe {
            id: 2,
            title: "Rice Omelette".to_string(),
            making_time: "30 min".to_string(),
            serves: "2 people".to_string(),
            ingredients: "onion, egg, seasoning, soy sauce".to_string(),
            cost: 700,
            created_at: "2016-01-11 13:10:12".to_string(),
            updated_at: "2016-01-11 13:10:12".to_string(),
        },
    ]
}
