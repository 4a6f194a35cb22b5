//! # Response Formatting
//!
//! Envelopes returned by the recipe endpoints.
//!
//! Create and get-by-id wrap the record in a one-element array, patch returns
//! the bare record. Clients depend on both shapes.

use serde::Serialize;

use crate::store::Recipe;

pub const CREATED_MESSAGE: &str = "Recipe successfully created!";
pub const DETAILS_MESSAGE: &str = "Recipe details by id";
pub const UPDATED_MESSAGE: &str = "Recipe successfully updated!";
pub const REMOVED_MESSAGE: &str = "Recipe successfully removed!";

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

impl RecipeListResponse {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

/// Single record wrapped in an array (create, get-by-id)
#[derive(Debug, Clone, Serialize)]
pub struct WrappedRecipeResponse {
    pub message: &'static str,
    pub recipe: Vec<Recipe>,
}

impl WrappedRecipeResponse {
    pub fn created(recipe: Recipe) -> Self {
        Self {
            message: CREATED_MESSAGE,
            recipe: vec![recipe],
        }
    }

    pub fn details(recipe: Recipe) -> Self {
        Self {
            message: DETAILS_MESSAGE,
            recipe: vec![recipe],
        }
    }
}

/// Updated record, not wrapped
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedRecipeResponse {
    pub message: &'static str,
    pub recipe: Recipe,
}

impl UpdatedRecipeResponse {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            message: UPDATED_MESSAGE,
            recipe,
        }
    }
}

/// Message-only body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<&'static str>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            required: None,
        }
    }

    pub fn removed() -> Self {
        Self::new(REMOVED_MESSAGE)
    }

    /// Attach the list of required fields
    pub fn with_required(mut self, required: &'static str) -> Self {
        self.required = Some(required);
        self
    }
}
