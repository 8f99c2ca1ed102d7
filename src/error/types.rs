//! API error types
//!
//! Errors returned to the voice platform host. Upstream comics-API failures
//! never surface here: the skill route answers those with canned speech and
//! HTTP 200, because the platform treats non-200 as a skill crash.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden_error", msg),
            ApiError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error", msg)
            }
            ApiError::Internal(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "api_error", err.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                type_: error_type.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    type_: String,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let forbidden = ApiError::Forbidden("wrong application".into()).into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let invalid = ApiError::InvalidRequest("bad envelope".into()).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let internal = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
