use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use super::exception::ApiError;

/// Boundary mapping: every error becomes `(status, {"detail": ...})`, with
/// throttled responses additionally advertising the wait via `Retry-After`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(status = status.as_u16(), detail = %self, "request failed with server error");
        }

        let retry_after = match &self {
            ApiError::Throttled { wait: Some(wait), .. } => Some(*wait),
            _ => None,
        };

        let mut response = (status, Json(json!({ "detail": self.detail_value() }))).into_response();

        if let Some(wait) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(wait));
        }

        response
    }
}
