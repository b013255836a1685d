//! Error types shared by the pod source, the view builder and the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The pod source could not answer (network, auth or API failure)
    #[error("{0}")]
    SourceUnavailable(String),

    #[error("invalid sort option. Valid options are \"name\", \"age\", or \"restarts\"")]
    InvalidSortParameter(String),

    #[error("invalid sort direction. Valid options are \"asc\" or \"desc\"")]
    InvalidSortDirection(String),

    #[error("invalid timestamp: {0}")]
    TimestampParse(#[from] chrono::ParseError),
}

impl AppError {
    pub fn source_unavailable(msg: &str) -> Self {
        AppError::SourceUnavailable(msg.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSortParameter(_) | AppError::InvalidSortDirection(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<kube::Error> for AppError {
    fn from(err: kube::Error) -> Self {
        AppError::SourceUnavailable(err.to_string())
    }
}

/// Body returned by `/pods` on failure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = ErrorMessage {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
