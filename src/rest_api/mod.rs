//! # Recipe REST API Module
//!
//! HTTP endpoints for recipe CRUD:
//!
//! - `POST /recipes` - create
//! - `GET /recipes` - list
//! - `GET /recipes/:id` - fetch one
//! - `PATCH /recipes/:id` - partial update
//! - `DELETE /recipes/:id` - delete

pub mod errors;
pub mod response;
pub mod routes;
pub mod validation;

pub use errors::{ApiError, ApiResult};
pub use routes::recipe_routes;
pub use validation::{validate_create, validate_update, REQUIRED_FIELDS};
