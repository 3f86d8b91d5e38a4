use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pizza_core::error::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
///
/// Every fault is a 500 carrying the fault text; bad input is never turned
/// into a 4xx.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, kind = self.0.kind(), "Request failed");

        let body = ErrorResponse {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
