use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(sqlx::Error),
}

impl ApiError {
    pub fn conflict(message: &str) -> Self {
        Self::Conflict(message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // The only raw insert is the news row; a lost race on its unique
        // source_url surfaces as the same conflict the upfront check gives.
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict("The news already exist in the database".to_string())
            }
            _ => Self::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, detail) = match &self {
            Self::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            Self::Database(err) => {
                error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (code, Json(json!({"detail": detail}))).into_response()
    }
}
