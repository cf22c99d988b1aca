//! Request-level errors for the HTTP layer

use super::pages;
use crate::charts::ChartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures a handler can surface to the client
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Chart encoding failed: {0}")]
    Chart(#[from] ChartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, pages::server_error()).into_response()
    }
}
