use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stockroom_core::StockroomError;

/// JSON error envelope returned by every failing route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Web-facing wrapper that maps core failures onto HTTP responses
#[derive(Debug)]
pub struct ApiError(pub StockroomError);

impl From<StockroomError> for ApiError {
    fn from(err: StockroomError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match self.0 {
            StockroomError::ItemNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
