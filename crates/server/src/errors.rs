use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// JSON error envelope for the fleet API.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    NotFound(&'static str),
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound(entity)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self::Service(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::Service(ServiceError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            Self::Service(ServiceError::Storage(msg)) => {
                error!(error = %msg, "storage failure surfaced to API");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal storage error".to_string())
            }
            Self::NotFound(entity) => (StatusCode::NOT_FOUND, format!("{entity} not found")),
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}
