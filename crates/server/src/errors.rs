use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, info};

/// Error envelope returned by every endpoint on failure.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "food 7 not found")]
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => {
                info!(status = status.as_u16(), error = %msg, "request rejected");
                msg
            }
            ApiError::Internal(detail) => {
                // store details stay in the log
                error!(error = %detail, "request failed");
                "internal server error".to_string()
            }
        };
        (status, Json(ErrorBody { status: status.as_u16(), message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        use models::errors::ModelError;
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
}
