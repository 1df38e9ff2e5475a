use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::export::ExportError;

use super::handlers::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        let body = ApiResponse {
            success: false,
            message: format!("Error: {}", self),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
