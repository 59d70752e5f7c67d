use crate::domain::model::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::core::service::ServiceResult;

/// 錯誤回應與其 HTTP 狀態碼
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ErrorResponse,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, error: ErrorResponse) -> Self {
        Self { status, error }
    }

    pub fn bad_request(error: ErrorResponse) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn not_found(error: ErrorResponse) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    pub fn method_not_allowed(allowed: &str) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorResponse::new(format!("Method not allowed. Use {}", allowed)),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// 核心失敗一律對應 400，並回傳原始輸入
pub fn respond<T: Serialize>(result: ServiceResult<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            tracing::warn!(
                kind = error.kind.as_deref().unwrap_or("request"),
                "Rejected request: {}",
                error.message
            );
            ApiErrorResponse::bad_request(error).into_response()
        }
    }
}
