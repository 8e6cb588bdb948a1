use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type. Handlers return `Result<T, AppError>` and the
/// `IntoResponse` impl translates each failure to its status code and a
/// `{"message": ...}` body at the endpoint boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("upload rejected: {0}")]
    UploadRejected(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::UploadRejected(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Database(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error, please try again later".to_string(),
                )
            }
            AppError::Migrate(err) => {
                tracing::error!("migration error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error, please try again later".to_string(),
                )
            }
            AppError::Io(err) => {
                tracing::error!("io error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error, please try again later".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_faults_map_to_400() {
        for err in [
            AppError::UploadRejected("Only PDF files are allowed.".into()),
            AppError::Validation("Invalid email format".into()),
            AppError::Conflict("Candidate with this email already exists".into()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_record_maps_to_404() {
        let resp = AppError::NotFound("Candidate not found".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_faults_map_to_500() {
        let resp = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
