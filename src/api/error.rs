//! API error type with IntoResponse
//!
//! Store details are logged, never sent to the client.

use crate::error::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tokio::task::JoinError;

#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the repository layer
    Registry(RegistryError),

    /// The blocking store task did not complete
    Internal { message: String },
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError::Registry(err)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            ApiError::Registry(RegistryError::ConstraintViolation { .. }) => (
                StatusCode::CONFLICT,
                "conflict",
                "the request conflicts with stored data",
            ),
            ApiError::Registry(RegistryError::NotExactlyOne { .. }) => {
                (StatusCode::NOT_FOUND, "not_found", "no single matching hero")
            }
            ApiError::Registry(RegistryError::StoreUnavailable { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                "the store is unavailable",
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "an internal error occurred",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        match &self {
            ApiError::Registry(e) => tracing::error!("Request failed: {}", e),
            ApiError::Internal { message } => tracing::error!("Internal error: {}", message),
        }

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_constraint_violation_is_conflict() {
        let error = ApiError::from(RegistryError::ConstraintViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["error"], "conflict");
        assert!(!body["message"].as_str().unwrap().contains("FOREIGN KEY"));
    }

    #[tokio::test]
    async fn test_not_exactly_one_is_not_found() {
        let response = ApiError::from(RegistryError::NotExactlyOne { found: 0 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let error = ApiError::from(RegistryError::Database(
            rusqlite::Error::InvalidColumnName("secret_column".to_string()),
        ));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "an internal error occurred");
    }

    #[tokio::test]
    async fn test_store_unavailable_is_service_unavailable() {
        let error = ApiError::from(RegistryError::StoreUnavailable {
            message: "cannot create /srv/private/data: Permission denied".to_string(),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "unavailable");
        assert!(!body["message"].as_str().unwrap().contains("/srv/private"));
    }
}
