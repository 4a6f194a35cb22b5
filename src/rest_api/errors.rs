//! # REST API Errors
//!
//! Failure envelopes for the recipe endpoints. Each variant fixes both the
//! status code and the message clients see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::UpdateError;

use super::response::MessageResponse;
use super::validation::REQUIRED_FIELDS;

/// Result type for recipe handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Recipe API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Creation body lacks a required field
    #[error("Recipe creation failed!")]
    MissingRequiredFields,

    /// The store rejected a creation
    #[error("Recipe creation failed!")]
    CreationFailed,

    /// Listing failed in the store
    #[error("Failed to retrieve recipes")]
    ListFailed,

    /// Target record is absent, or the store could not be read
    #[error("No recipe found")]
    NotFound,

    /// Patch body supplied no fields
    #[error("No fields provided to update.")]
    NoFieldsToUpdate,

    /// Patch applied but the record could not be read back
    #[error("Failed to retrieve updated recipe")]
    RefetchFailed,

    /// Delete failed in the store
    #[error("Failed to delete recipe")]
    DeleteFailed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Creation failures are reported with 200
            ApiError::MissingRequiredFields => StatusCode::OK,
            ApiError::CreationFailed => StatusCode::OK,

            ApiError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,

            ApiError::NotFound => StatusCode::NOT_FOUND,

            ApiError::ListFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RefetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpdateError> for ApiError {
    fn from(err: UpdateError) -> Self {
        match err {
            UpdateError::NoFields => ApiError::NoFieldsToUpdate,
        }
    }
}

impl From<ApiError> for MessageResponse {
    fn from(err: ApiError) -> Self {
        let body = MessageResponse::new(err.to_string());
        match err {
            ApiError::MissingRequiredFields => body.with_required(REQUIRED_FIELDS),
            _ => body,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingRequiredFields.status_code(), StatusCode::OK);
        assert_eq!(ApiError::CreationFailed.status_code(), StatusCode::OK);
        assert_eq!(
            ApiError::NoFieldsToUpdate.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::ListFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::RefetchFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::DeleteFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_required_only_on_validation_failure() {
        let body = MessageResponse::from(ApiError::MissingRequiredFields);
        assert_eq!(body.message, "Recipe creation failed!");
        assert_eq!(
            body.required,
            Some("title, making_time, serves, ingredients, cost")
        );

        let body = MessageResponse::from(ApiError::CreationFailed);
        assert_eq!(body.message, "Recipe creation failed!");
        assert!(body.required.is_none());
    }

    #[test]
    fn test_update_error_conversion() {
        assert_eq!(
            ApiError::from(UpdateError::NoFields),
            ApiError::NoFieldsToUpdate
        );
    }
}
