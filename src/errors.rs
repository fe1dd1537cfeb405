use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),
}

/// Helper for mapping storage-layer failures
pub fn database_error<E: ToString>(err: E) -> AppError {
    AppError::DatabaseError(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{self}");
        }

        // Wire contract: every handled failure is {"error": {LABEL: message}}
        let body = match &self {
            AppError::NotFound(msg) => json!({ "error": { "NOT FOUND": msg } }),
            AppError::Forbidden(msg) => json!({ "error": { "FORBIDDEN": msg } }),
            AppError::BadRequest(msg) => json!({ "error": { "BAD REQUEST": msg } }),
            AppError::DatabaseError(_) => {
                json!({ "error": { "ERROR": self.to_string() } })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_error_body() {
        let response = AppError::NotFound("no cafe with that id".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = AppError::Forbidden("bad api_key".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
